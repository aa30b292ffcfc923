//! Syntax fault reports
//!
//! A [`Diagnostic`] is produced for every recoverable syntax fault. It carries
//! the position of the offending token and, when the parser was built from
//! source text, the full source line so that a caret can be drawn under the
//! column.

use super::ast::SourceLocation;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub location: SourceLocation,
    /// The line of source the fault points into, when source text is known.
    pub source_line: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// Padding followed by `^`, aligned under the 1-based column.
    ///
    /// Tabs in the quoted line are repeated in the padding so the caret lines
    /// up however the terminal expands them.
    pub fn caret(&self) -> String {
        let width = self.location.column.saturating_sub(1);
        let line = self.source_line.as_deref().unwrap_or("");

        let mut caret: String = line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(width)
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();
        caret.push('^');
        caret
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )?;

        if let Some(line) = &self.source_line {
            write!(f, "\n   {}\n   {}", line, self.caret())?;
        }

        Ok(())
    }
}
