//! exprs - an embeddable evaluator for C-like expressions
//!
//! # Overview
//!
//! exprs evaluates a single expression made of literals, C-like arithmetic,
//! bitwise, logical, relational and string operators into one dynamically
//! typed [`Term`]: a 64-bit integer, a double or a string. It is meant to be
//! linked into tools that need runtime evaluation of user-supplied
//! expressions, such as assemblers, config evaluators or calculators.
//!
//! # Quick Start
//!
//! ```
//! use exprs::{Context, ContextOptions, EvalFlags, Term};
//!
//! let mut ctx = Context::new(ContextOptions::default()).unwrap();
//!
//! assert_eq!(ctx.evaluate("2 + 2 ** 2 * 4 / 2", EvalFlags::empty()).unwrap(), Term::Integer(10));
//! assert_eq!(ctx.evaluate("100 / 2.0", EvalFlags::empty()).unwrap(), Term::Float(50.0));
//! assert_eq!(
//!     ctx.evaluate(r#"1.2 + "2.3""#, EvalFlags::empty()).unwrap(),
//!     Term::String("1.22.3".to_string()),
//! );
//! ```
//!
//! # Errors
//!
//! Every failure carries an [`ErrorCode`] tier and a [`Diagnostic`] pointing
//! into the expression. [`render_error`] draws it under the source text:
//!
//! ```no_run
//! use exprs::{evaluate, render_error};
//!
//! if let Err(e) = evaluate("(1 + 2") {
//!     render_error(&e);
//! }
//! ```

mod error_renderer;

// Re-export public API from exprs_core
pub use exprs_core::api::{
    Context, ContextOptions, Diagnostic, Error, ErrorCode, EvalFlags, error_code_to_string,
    evaluate,
};

// Re-export the term model
pub use exprs_core::values::{self, Term, TermType};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
