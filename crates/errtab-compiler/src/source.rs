//! Input sources and record locations.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// One errordata file's name and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Display name, also the sort key that fixes processing order.
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Where a record came from: file, 1-based line, the line itself, and the
/// byte range within that line an error points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: Arc<str>,
    pub line: usize,
    pub text: Arc<str>,
    pub span: Range<usize>,
}

impl Location {
    pub fn new(file: Arc<str>, line: usize, text: Arc<str>, span: Range<usize>) -> Self {
        Self {
            file,
            line,
            text,
            span,
        }
    }

    /// Same line, narrower span.
    pub fn at(&self, span: Range<usize>) -> Self {
        Self {
            span,
            ..self.clone()
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
