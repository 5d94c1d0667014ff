//! Configuration for contexts and individual evaluations.

use bitflags::bitflags;

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration fixed when a [`Context`](super::Context) is created.
///
/// # Example
///
/// ```
/// use exprs_core::ContextOptions;
///
/// let options = ContextOptions {
///     memory_limit: Some(64 * 1024),
///     ..ContextOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Bytes reserved up front for the per-call scratch arena.
    ///
    /// Default: 4 KiB
    pub arena_capacity: usize,

    /// Cap on the bytes the scratch arena may allocate, if set.
    ///
    /// Expressions whose syntax tree does not fit fail with a resource error.
    ///
    /// Default: None
    pub memory_limit: Option<usize>,

    /// Maximum nesting depth, shared by the parser and the evaluator.
    ///
    /// Default: 500
    pub max_depth: usize,

    /// Initial diagnostic trace level (see [`Context::set_verbose`](super::Context::set_verbose)).
    ///
    /// Default: 0
    pub verbose: u8,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            arena_capacity: 4 * 1024,
            memory_limit: None,
            max_depth: DEFAULT_MAX_DEPTH,
            verbose: 0,
        }
    }
}

bitflags! {
    /// Per-call variants of evaluation.
    ///
    /// The empty set applies the usual coercion rules unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EvalFlags: u32 {
        /// Reject float literals with a type error.
        const INTEGER_ONLY = 1 << 0;
        /// Reject string literals with a type error.
        const NO_STRINGS = 1 << 1;
    }
}
