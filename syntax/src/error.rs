use std::error::Error;
use std::fmt;

/// Describes an error that occurred in parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// The error message. This is a string instead of an enum because the
    /// messages can be highly specific.
    pub message: String,

    /// Byte offset into the text as the failing stage saw it: `let`
    /// expansion reads the raw program, expression parsing reads the
    /// expanded, whitespace-stripped form.
    pub offset: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl Error for ParseError {}
