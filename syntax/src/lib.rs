//! The core rill syntax implementation.
//!
//! The provided parser turns program text into an expression tree, which the
//! runtime reduces directly. Parsing runs in three stages: leading `let`
//! bindings are expanded into ordinary applications, all whitespace is
//! stripped, and the remaining text is parsed by recursive descent.

pub mod ast;
pub mod desugar;
pub mod error;
mod parser;
pub mod source;

pub use parser::parse;
