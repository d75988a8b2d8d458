//! The rill runtime: a substitution engine that rewrites parsed
//! expressions until they reach a normal form.

pub mod error;
mod eval;
mod subst;

// Re-export syntax crate.
pub mod syntax {
    pub use rill_syntax::*;
}

pub mod prelude {
    pub use crate::error::EvalError;
    pub use crate::eval::{reduce, reduce_with_limit};
    pub use crate::subst::substitute;
    pub use crate::syntax::ast::Expr;
}

pub use crate::eval::{reduce, reduce_with_limit};
pub use crate::subst::substitute;

use crate::error::EvalError;
use crate::syntax::ast::Expr;
use crate::syntax::source::SourceFile;

/// Parse and reduce a program in one call.
pub fn eval(file: impl Into<SourceFile>) -> Result<Expr, EvalError> {
    reduce(syntax::parse(file)?)
}
