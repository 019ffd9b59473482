//! Assembler for the [um](../um/index.html) Universal Machine.
//!
//! The main function provided by this crate is [`assemble`](fn.assemble.html), which accepts
//! some string input containing a program written in the scroll assembly language, and outputs
//! the carved stone. The stone is represented by the [`Stone`](../stonefile/struct.Stone.html)
//! type from the [stonefile](../stonefile/index.html) crate. Additionally, a
//! [`SourceMap`](type.SourceMap.html) is returned, which associates each word of the stone with
//! the scroll line it was carved from.
//!
//! Parsing the scroll language is implemented using [pest]. In fact, the main
//! [`Error`](type.Error.html) type used by this crate is just a type alias of
//! `pest::error::Error`. This means that all functionality provided by [pest] is also
//! available, such as pretty formatting of errors.
//!
//! # Scroll Language
//!
//! A scroll is line-oriented: every line holds at most one label definition or one statement.
//! Comments start with a hash-symbol `#` and continue to the end of the line.
//!
//! ## Statements
//!
//! A statement is an operator mnemonic followed by its comma-separated parameters. Each
//! statement carves exactly one platter. Registers are named `A` through `H`. The parameter
//! kinds and counts are fixed per operator:
//!
//! Mnemonic      | Short Description                              | Syntax
//! --------------|------------------------------------------------|--------------------------
//! `CondMove`    | Move `b` to `a` unless `c` is zero             | `CondMove a, b, c`
//! `Index`       | Load `a` from array `b` at offset `c`          | `Index a, b, c`
//! `Amend`       | Store `c` into array `a` at offset `b`         | `Amend a, b, c`
//! `Add`         | Addition modulo 2³²                            | `Add a, b, c`
//! `Mult`        | Multiplication modulo 2³²                      | `Mult a, b, c`
//! `Div`         | Unsigned truncating division                   | `Div a, b, c`
//! `Nand`        | Bitwise not-and                                | `Nand a, b, c`
//! `Halt`        | Stop the machine                               | `Halt`
//! `Alloc`       | Allocate `c` platters, identifier into `b`     | `Alloc b, c`
//! `Abandon`     | Free array `c`                                 | `Abandon c`
//! `Output`      | Write byte `c`                                 | `Output c`
//! `Input`       | Read byte into `c`                             | `Input c`
//! `Load`        | Switch program to array `b`, finger to `c`     | `Load b, c`
//! `Orthography` | Load a 25-bit immediate into `a`               | `Orthography a, value`
//! `Data`        | Carve a raw 32-bit word                        | `Data value`
//!
//! ## Expressions
//!
//! The `value` parameter of `Orthography` and `Data` is an expression: an unsigned integer
//! literal (decimal, hexadecimal `0x`, octal `0o` or binary `0b`), a single-quoted ASCII
//! character whose code point is taken, or a label reference. `Orthography` requires the
//! resolved value to fit in 25 bits; `Data` accepts any 32-bit value.
//!
//! ## Labels
//!
//! A line of the form `name:` defines a label pointing at the statement that follows it.
//! Labels resolve to instruction indices, not byte offsets; every statement, `Data` words
//! included, occupies exactly one platter. Forward references are allowed. Defining the same
//! label twice or referencing an undefined label is an error.
//!
//! [pest]: https://docs.rs/pest/

mod int_util;
mod labels;
mod parser;
mod source_map;
mod statements;


use parser::{Rule, ScrollParser};
use pest::iterators::Pair;
use pest::{Parser, Span};
pub use source_map::{SourceMap, SourceMapItem};
use stonefile::Stone;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

pub fn assemble(input: &str) -> Result<(Stone, SourceMap)> {
    assemble_parsed(parse(input)?)
}

/// The 1-based scroll line an error points at.
pub fn error_line(error: &Error) -> usize {
    match error.line_col {
        pest::error::LineColLocation::Pos((line, _)) => line,
        pest::error::LineColLocation::Span((line, _), _) => line,
    }
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(ScrollParser::parse(Rule::program, input)?.next().unwrap())
}

fn assemble_parsed(pair: Pair<Rule>) -> Result<(Stone, SourceMap)> {
    let (statements, labels, source_map) = statements::process_program(pair)?;
    let words = statements::assemble_statements(&statements, &labels)?;

    Ok((Stone::from(words), source_map))
}
