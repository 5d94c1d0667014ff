//! Core of the exprs expression engine.
//!
//! Text goes through the [`parser`] (a logos lexer feeding a precedence-climbing
//! parser that builds a bump-allocated tree), then through the [`evaluator`],
//! which folds the tree into a single dynamically-typed [`Term`]. The [`api`]
//! module wraps both behind a reusable [`Context`].

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod syntax;
pub mod values;

pub use api::{
    Context, ContextOptions, Diagnostic, Error, ErrorCode, EvalFlags, error_code_to_string,
    evaluate,
};
pub use values::{Term, TermType};
