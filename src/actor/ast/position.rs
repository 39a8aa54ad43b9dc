//! Line and column positions
//!
//! Positions are rendered as `[Line LLLL:CC]`, line zero-padded to 4 digits and column to 2.
//! Unknown positions are (0, 0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a position in an actor file (line and indentation column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// True for positions that were never set by the parser
    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Line {:04}:{:02}]", self.line, self.column)
    }
}
