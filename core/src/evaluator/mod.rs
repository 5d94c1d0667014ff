//! Tree-walking evaluator for parsed expressions.
//!
//! The evaluator folds a [`ParsedExpr`] bottom-up into a single [`Term`],
//! applying the coercion rules of each operator as it goes.
//!
//! ## Design Principles
//!
//! - **Never panic**: every operator and operand combination yields a term or an error
//! - **Stack-safe**: depth tracking prevents stack overflow from deeply nested expressions
//! - **Owned results**: intermediate terms are dropped as soon as they are folded
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use exprs_core::{Term, evaluator, parser};
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "2 + 2 ** 2 * 4 / 2").unwrap();
//! let result = evaluator::eval(&parsed).unwrap();
//! assert_eq!(result, Term::Integer(10));
//! ```

mod error;
mod eval;
mod operators;


pub use error::{ExecutionError, ExecutionErrorKind, ResourceExceededError, RuntimeError};

use crate::{api::EvalFlags, parser::ParsedExpr, values::Term};

/// Default limit on how deeply evaluation may recurse.
pub const DEFAULT_MAX_DEPTH: usize = 500;

#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    pub max_depth: usize,
    /// Diagnostic trace level: 1 logs each operator application.
    pub verbose: u8,
    pub flags: EvalFlags,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            verbose: 0,
            flags: EvalFlags::empty(),
        }
    }
}

/// Evaluate a parsed expression with default options.
pub fn eval<'a>(parsed: &'a ParsedExpr<'a>) -> Result<Term, ExecutionError> {
    eval_with_options(parsed, EvaluatorOptions::default())
}

/// Evaluate a parsed expression with custom limits and flags.
///
/// ```
/// use bumpalo::Bump;
/// use exprs_core::{EvalFlags, evaluator::{self, EvaluatorOptions}, parser};
///
/// let arena = Bump::new();
/// let parsed = parser::parse(&arena, "1.5 + 1").unwrap();
/// let options = EvaluatorOptions {
///     flags: EvalFlags::INTEGER_ONLY,
///     ..EvaluatorOptions::default()
/// };
/// assert!(evaluator::eval_with_options(&parsed, options).is_err());
/// ```
pub fn eval_with_options<'a>(
    parsed: &'a ParsedExpr<'a>,
    options: EvaluatorOptions,
) -> Result<Term, ExecutionError> {
    eval::Evaluator::new(options, parsed).eval()
}
