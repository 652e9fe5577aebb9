// Configuration for a single extraction run.

use crate::output::OutputFormat;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Pages holding the printed table of contents, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub begin: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Zero-based page indices covered by this range.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.begin.saturating_sub(1)..=self.end.saturating_sub(1)
    }

    /// The page right after the contents, the usual place where page 1 starts.
    pub fn default_offset(&self) -> i64 {
        self.end as i64 + 1
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self { begin: 1, end: 1 }
    }
}

/// Settings for one `autotoc` run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// PDF or plain text document to read
    pub input: PathBuf,

    /// Pages containing the contents listing
    pub range: PageRange,

    /// Added to every page number; defaults to `range.end + 1`
    pub offset: Option<i64>,

    pub format: OutputFormat,

    /// Destination file, stdout when unset
    pub output: Option<PathBuf>,
}

impl ExtractConfig {
    pub fn effective_offset(&self) -> i64 {
        self.offset.unwrap_or_else(|| self.range.default_offset())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            range: PageRange::default(),
            offset: None,
            format: OutputFormat::Text,
            output: None,
        }
    }
}
