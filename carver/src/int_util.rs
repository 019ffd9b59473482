use crate::*;
use num::{Num, Unsigned};
use pest::iterators::Pair;
use std::num::ParseIntError;

fn process_num_lit<T>(pair: Pair<Rule>, base: u32) -> Result<T>
where
    T: Num<FromStrRadixErr = ParseIntError>,
{
    let span = pair.as_span();
    T::from_str_radix(span.as_str(), base)
        .map_err(|err| new_parser_error(span, format!("Parsing integer failed: {}", err)))
}

pub fn process_uint<T>(pair: Pair<Rule>) -> Result<T>
where
    T: Unsigned + Num<FromStrRadixErr = ParseIntError>,
{
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::bin_uint => process_num_lit(inner.into_inner().next().unwrap(), 2),
        Rule::oct_uint => process_num_lit(inner.into_inner().next().unwrap(), 8),
        Rule::hex_uint => process_num_lit(inner.into_inner().next().unwrap(), 16),
        Rule::dec_uint => process_num_lit(inner, 10),
        _ => unreachable!(),
    }
}
