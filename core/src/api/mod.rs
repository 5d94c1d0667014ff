//! Public API for the expression engine.
//!
//! A [`Context`] carries call-independent configuration and a scratch arena.
//! Each [`Context::evaluate`] call parses and evaluates one expression,
//! returning an owned [`Term`](crate::Term) or an [`Error`] with its code.
//!
//! # Example
//!
//! ```
//! use exprs_core::{Context, ContextOptions, EvalFlags, ErrorCode, Term};
//!
//! let mut ctx = Context::new(ContextOptions::default()).unwrap();
//! assert_eq!(ctx.evaluate("0xFF & 0x7F", EvalFlags::empty()).unwrap(), Term::Integer(0x7F));
//!
//! let err = ctx.evaluate("1/0", EvalFlags::empty()).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::Domain);
//! assert_eq!(ctx.last_error(), ErrorCode::Domain);
//! ```

pub mod context;
pub mod error;
pub mod options;

pub use context::{Context, evaluate};
pub use error::{Diagnostic, Error, ErrorCode, error_code_to_string};
pub use options::{ContextOptions, EvalFlags};
