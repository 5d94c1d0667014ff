//! Core evaluation logic.

use tracing::debug;

use crate::{
    api::EvalFlags,
    evaluator::{
        EvaluatorOptions, ExecutionError, ExecutionErrorKind, ResourceExceededError,
        RuntimeError, operators,
    },
    parser::{Expr, Literal, ParsedExpr, Span},
    values::Term,
};

/// Evaluator for parsed expressions.
pub struct Evaluator<'a> {
    options: EvaluatorOptions,
    /// The parsed expression being evaluated (used for error context).
    parsed: &'a ParsedExpr<'a>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(options: EvaluatorOptions, parsed: &'a ParsedExpr<'a>) -> Self {
        Self {
            options,
            parsed,
            depth: 0,
        }
    }

    fn error(&self, expr: &'a Expr<'a>, kind: impl Into<ExecutionErrorKind>) -> ExecutionError {
        let span = self
            .parsed
            .ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, self.parsed.ann.source.len()));
        ExecutionError::new(kind, span)
    }

    /// Evaluate the whole expression.
    pub fn eval(&mut self) -> Result<Term, ExecutionError> {
        self.eval_expr(self.parsed.expr)
    }

    fn eval_expr(&mut self, expr: &'a Expr<'a>) -> Result<Term, ExecutionError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(self.error(
                expr,
                ResourceExceededError::StackOverflow {
                    max_depth: self.options.max_depth,
                },
            ));
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(&mut self, expr: &'a Expr<'a>) -> Result<Term, ExecutionError> {
        match *expr {
            Expr::Literal(literal) => self.eval_literal(expr, literal),
            Expr::Unary { op, expr: operand } => {
                let value = self.eval_expr(operand)?;
                if self.options.verbose >= 1 {
                    debug!(op = %op, operand = ?value, "unary");
                }
                operators::eval_unary(op, value).map_err(|e| self.error(expr, e))
            }
            Expr::Binary { .. } => self.eval_binary_chain(expr),
        }
    }

    /// Evaluate a binary node and the left-nested binary nodes under it.
    ///
    /// Left-associative chains such as `1 + 2 + 3 + ...` grow down the left
    /// side of the tree, so the spine is walked in a loop and only right
    /// operands recurse. Flat chains of any length stay within one level.
    fn eval_binary_chain(&mut self, expr: &'a Expr<'a>) -> Result<Term, ExecutionError> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let Expr::Binary { left, .. } = *leftmost {
            spine.push(leftmost);
            leftmost = left;
        }

        let mut acc = self.eval_expr(leftmost)?;
        for &node in spine.iter().rev() {
            let Expr::Binary { op, right, .. } = *node else {
                continue;
            };
            // Both sides are always evaluated, `&&` and `||` included.
            let right = self.eval_expr(right)?;
            if self.options.verbose >= 1 {
                debug!(op = %op, left = ?acc, right = ?right, "binary");
            }
            acc = operators::eval_binary(op, acc, right).map_err(|e| self.error(node, e))?;
        }
        Ok(acc)
    }

    fn eval_literal(
        &self,
        expr: &'a Expr<'a>,
        literal: Literal<'a>,
    ) -> Result<Term, ExecutionError> {
        let flags = self.options.flags;
        match literal {
            Literal::Int(value) => Ok(Term::Integer(value)),
            Literal::Float(_) if flags.contains(EvalFlags::INTEGER_ONLY) => {
                Err(self.error(expr, RuntimeError::FloatNotPermitted))
            }
            Literal::Float(value) => Ok(Term::Float(value)),
            Literal::Str(_) if flags.contains(EvalFlags::NO_STRINGS) => {
                Err(self.error(expr, RuntimeError::StringNotPermitted))
            }
            // Copy out of the arena so the term owns its text.
            Literal::Str(value) => Ok(Term::String(value.to_string())),
        }
    }
}
