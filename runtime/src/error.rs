use crate::syntax::error::ParseError;
use std::error::Error;
use std::fmt;

/// Errors that can abort an evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalError {
    /// The program text did not parse.
    Parse(ParseError),

    /// Arguments were applied to a substituted value that is not a
    /// definition.
    NotAFunction { name: String },

    /// Reduction reached a call whose name no enclosing definition ever
    /// bound.
    UnresolvedCall { name: String },

    /// The configured step ceiling was hit before a normal form was
    /// reached.
    LimitExceeded { steps: u64 },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::Parse(e) => write!(f, "error parsing: {}", e),
            EvalError::NotAFunction { name } => {
                write!(f, "can only call functions: '{}' did not resolve to one", name)
            }
            EvalError::UnresolvedCall { name } => write!(f, "unresolved function '{}'", name),
            EvalError::LimitExceeded { steps } => {
                write!(f, "no normal form after {} reduction steps", steps)
            }
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EvalError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        EvalError::Parse(error)
    }
}
