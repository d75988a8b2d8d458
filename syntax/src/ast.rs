//! Expression tree definitions for the language syntax.

use std::collections::VecDeque;
use std::fmt;

/// Abstract representation of an expression.
///
/// Contains a variant for each different expression type.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A bare identifier that no substitution has resolved. Terminal if it
    /// never matches a bound name.
    Variable(String),

    /// A use of a name applied to arguments. The name was free at parse
    /// time and must be supplied by a later substitution before the call
    /// can reduce.
    Call {
        name: String,
        args: VecDeque<Expr>,
    },

    /// A named function. The name doubles as the formal parameter bound
    /// inside the body; `args` queues the actual arguments still waiting
    /// to be substituted in, consumed front first.
    Definition {
        name: String,
        body: Box<Expr>,
        args: VecDeque<Expr>,
    },
}

impl Expr {
    /// Create a variable expression.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Create a call of `name` applied to the given arguments.
    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Create a definition with the given body and pending arguments.
    pub fn definition(
        name: impl Into<String>,
        body: Expr,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Expr::Definition {
            name: name.into(),
            body: Box::new(body),
            args: args.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "Variable({:?})", name),
            Expr::Call { name, args } => f.debug_struct("Call")
                .field("name", name)
                .field("args", args)
                .finish(),
            Expr::Definition { name, body, args } => f.debug_struct("Definition")
                .field("name", name)
                .field("body", body)
                .field("args", args)
                .finish(),
        }
    }
}

/// Renders the expression back in surface syntax. Arguments that are not
/// bare variables are parenthesized, so output can be denser with
/// parentheses than the text it was parsed from.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_args(f: &mut fmt::Formatter, args: &VecDeque<Expr>) -> fmt::Result {
            for arg in args {
                match arg {
                    Expr::Variable(name) => write!(f, ".{}", name)?,
                    arg => write!(f, ".({})", arg)?,
                }
            }

            Ok(())
        }

        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Call { name, args } => {
                write!(f, "{}", name)?;
                write_args(f, args)
            }
            Expr::Definition { name, body, args } => {
                write!(f, "{}({})", name, body)?;
                write_args(f, args)
            }
        }
    }
}
