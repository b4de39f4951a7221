//! Display types turning generated lines into outline text.
//!
//! The generator produces [`OutlineLine`] values; presentation is kept out of
//! it. [`OutlineLine`] renders a single indented line and [`Outline`] renders
//! the whole document, one line per node, each terminated by `\n`.
//!
//! ```rust
//! use almanac_core::display::{Outline, OutlineLine};
//!
//! let outline = Outline::new(vec![
//!     OutlineLine::new(0, "#Y 2025"),
//!     OutlineLine::new(1, "#YO Overview"),
//! ]);
//! assert_eq!(outline.to_string(), "#Y 2025\n\t#YO Overview\n");
//! ```

use std::fmt;

/// Indentation unit, one per depth level.
pub const INDENT: char = '\t';

/// Line terminator written after every outline line.
pub const LINE_BREAK: char = '\n';

/// A single outline node: its depth and its rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    pub depth: usize,
    pub text: String,
}

impl OutlineLine {
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

impl fmt::Display for OutlineLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            write!(f, "{INDENT}")?;
        }
        write!(f, "{}", self.text)
    }
}

/// An ordered, materialized outline in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    lines: Vec<OutlineLine>,
}

impl Outline {
    pub fn new(lines: Vec<OutlineLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[OutlineLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            write!(f, "{line}{LINE_BREAK}")?;
        }
        Ok(())
    }
}
