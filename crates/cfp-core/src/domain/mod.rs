pub mod errors;

pub use errors::{CfpError, CfpErrorCategory, CfpResult, ParserResult};

use std::fmt::{Display, Formatter};

pub type DatasetLine = String;

/// Column at which the right-justified unit number ends on a name-file line.
pub const NAME_FILE_UNIT_COLUMN_END: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CfpPackage {
    Coc,
    Crch,
    Cfp,
}

impl CfpPackage {
    pub const ALL: [CfpPackage; 3] = [Self::Coc, Self::Crch, Self::Cfp];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coc => "COC",
            Self::Crch => "CRCH",
            Self::Cfp => "CFP",
        }
    }

    pub const fn default_suffix(self) -> &'static str {
        match self {
            Self::Coc => "coc",
            Self::Crch => "crch",
            Self::Cfp => "cfp",
        }
    }

    pub const fn default_unit(self) -> u32 {
        match self {
            Self::Coc => 16,
            Self::Crch => 18,
            Self::Cfp => 17,
        }
    }

    /// Width of the right-justified unit field following the keyword.
    pub const fn unit_field_width(self) -> usize {
        NAME_FILE_UNIT_COLUMN_END - self.as_str().len()
    }
}

impl Display for CfpPackage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Ordered lines of one CFP input file. Order mirrors the positional dataset
/// numbering the simulator reads, so a block is never edited after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetBlock {
    package: CfpPackage,
    lines: Vec<DatasetLine>,
}

impl DatasetBlock {
    pub fn new(package: CfpPackage, lines: Vec<DatasetLine>) -> Self {
        Self { package, lines }
    }

    pub fn package(&self) -> CfpPackage {
        self.package
    }

    pub fn lines(&self) -> &[DatasetLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DatasetLine> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<DatasetLine> {
        self.lines
    }
}

impl<'a> IntoIterator for &'a DatasetBlock {
    type Item = &'a DatasetLine;
    type IntoIter = std::slice::Iter<'a, DatasetLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
