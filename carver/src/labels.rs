use crate::*;
use pest::iterators::Pair;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub type LabelMap<'i> = HashMap<&'i str, u32>;

/// Records a label definition pointing at the next instruction index.
pub fn define_label<'i>(
    labels: &mut LabelMap<'i>,
    name: Pair<'i, Rule>,
    index: u32,
) -> Result<()> {
    match labels.entry(name.as_str()) {
        Entry::Occupied(_) => Err(new_parser_error(
            name.as_span(),
            format!("Label \"{}\" is already defined", name.as_str()),
        )),
        Entry::Vacant(entry) => {
            entry.insert(index);
            Ok(())
        }
    }
}
