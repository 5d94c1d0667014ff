//! Evaluation contexts.

use bumpalo::Bump;
use tracing::{debug, trace};

use crate::{
    api::{ContextOptions, Error, ErrorCode, EvalFlags},
    evaluator::{self, EvaluatorOptions},
    parser::{self, ParserOptions},
    values::Term,
};

/// Reusable evaluation context.
///
/// Holds call-independent configuration, the code of the last error and a
/// scratch arena for syntax trees. The arena is reset at the start of every
/// [`evaluate`](Context::evaluate) call, so nothing leaks from one call into
/// the next. Taking `&mut self` rules out overlapping calls on one context;
/// use one context per thread for concurrent evaluation.
#[derive(Debug)]
pub struct Context {
    options: ContextOptions,
    arena: Bump,
    last_error: ErrorCode,
}

impl Context {
    /// Create a context, reserving its scratch arena.
    ///
    /// Fails with [`ErrorCode::Resource`] if the arena cannot be reserved.
    pub fn new(options: ContextOptions) -> Result<Self, Error> {
        let arena = Bump::try_with_capacity(options.arena_capacity)
            .map_err(|_| Error::out_of_memory(options.arena_capacity))?;
        arena.set_allocation_limit(options.memory_limit);
        if options.verbose >= 1 {
            debug!(
                arena_capacity = options.arena_capacity,
                memory_limit = ?options.memory_limit,
                max_depth = options.max_depth,
                "context created"
            );
        }
        Ok(Self {
            options,
            arena,
            last_error: ErrorCode::Success,
        })
    }

    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(ContextOptions::default())
    }

    /// Set the diagnostic trace level.
    ///
    /// 0 is silent, 1 emits a debug event per evaluation and per operator
    /// application, 2 also traces every token. Results are never affected.
    pub fn set_verbose(&mut self, level: u8) {
        self.options.verbose = level;
    }

    pub fn verbose(&self) -> u8 {
        self.options.verbose
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Code of the most recent [`evaluate`](Context::evaluate) call.
    pub fn last_error(&self) -> ErrorCode {
        self.last_error
    }

    /// Parse and evaluate `source`.
    ///
    /// On success the returned term owns all of its data. On failure nothing
    /// but the error survives the call.
    pub fn evaluate(&mut self, source: &str, flags: EvalFlags) -> Result<Term, Error> {
        let result = self.evaluate_inner(source, flags);
        self.last_error = match &result {
            Ok(_) => ErrorCode::Success,
            Err(error) => error.code(),
        };
        if self.options.verbose >= 1 {
            match &result {
                Ok(term) => debug!(source, result = ?term, "evaluated"),
                Err(error) => debug!(source, code = ?error.code(), %error, "evaluation failed"),
            }
        }
        result
    }

    fn evaluate_inner(&mut self, source: &str, flags: EvalFlags) -> Result<Term, Error> {
        self.arena.reset();

        let parser_options = ParserOptions {
            max_depth: self.options.max_depth,
            verbose: self.options.verbose,
        };
        let parsed = parser::parse_with_options(&self.arena, source, &parser_options)
            .map_err(|e| Error::from_parse(e, source))?;

        let evaluator_options = EvaluatorOptions {
            max_depth: self.options.max_depth,
            verbose: self.options.verbose,
            flags,
        };
        evaluator::eval_with_options(&parsed, evaluator_options)
            .map_err(|e| Error::from_execution(e, source))
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if self.options.verbose >= 1 {
            trace!(
                allocated_bytes = self.arena.allocated_bytes(),
                "context destroyed"
            );
        }
    }
}

/// Evaluate `source` once in a fresh default context.
///
/// ```
/// use exprs_core::{Term, evaluate};
///
/// assert_eq!(evaluate("1 + (2 + 3) * 4").unwrap(), Term::Integer(21));
/// ```
pub fn evaluate(source: &str) -> Result<Term, Error> {
    Context::with_defaults()?.evaluate(source, EvalFlags::empty())
}
