//! Parse error types for format specs.

use thiserror::Error;

/// An error that occurred while parsing a format spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    ///
    /// `line` and `column` are 1-based and count characters; `offset` is the
    /// byte offset of the offending character in the source text.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        offset: usize,
        message: String,
    },
}

impl ParseError {
    /// Byte offset of the offending character.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Syntax { offset, .. } => *offset,
        }
    }

    /// Human-readable description without the location prefix.
    pub fn message(&self) -> &str {
        match self {
            ParseError::Syntax { message, .. } => message,
        }
    }
}

/// A field reference used as a property name in a chained assignment
/// (`case=*0=2`).
#[derive(Debug, Error)]
#[error("a field reference can only be the last operand of an assignment")]
pub(crate) struct MisplacedReference;
