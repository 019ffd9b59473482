use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "scroll.pest"]
pub struct ScrollParser;
