#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceMapItem {
    pub line: u32,
}

pub type SourceMap = Vec<SourceMapItem>;
