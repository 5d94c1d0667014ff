//! Evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: an operator was applied to operands it does not
//!   accept (a type error) or to values outside its domain (a domain error).
//!   They abort the operator application and with it the whole evaluation.
//!
//! - **Resource exceeded errors**: evaluation ran past a configured limit.
//!   Fatal to the current call only; the context stays usable.

use thiserror::Error;

use crate::api::{Diagnostic, ErrorCode};
use crate::parser::Span;
use crate::values::TermType;

/// Evaluation error with the span of the expression that failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}")]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionErrorKind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Operator '{op}' cannot be applied to a {found} operand")]
    TypeMismatch { op: &'static str, found: TermType },
    #[error("Float literals are not permitted in integer-only evaluation")]
    FloatNotPermitted,
    #[error("String literals are not permitted in this evaluation")]
    StringNotPermitted,

    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Negative shift amount {amount}")]
    NegativeShift { amount: i64 },
    #[error("Negative integer exponent {exponent}")]
    NegativeExponent { exponent: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceededError {
    #[error("Evaluation stack overflow: depth exceeds maximum of {max_depth}")]
    StackOverflow { max_depth: usize },
}

impl RuntimeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeError::TypeMismatch { .. }
            | RuntimeError::FloatNotPermitted
            | RuntimeError::StringNotPermitted => ErrorCode::Type,
            RuntimeError::DivisionByZero
            | RuntimeError::ModuloByZero
            | RuntimeError::NegativeShift { .. }
            | RuntimeError::NegativeExponent { .. } => ErrorCode::Domain,
        }
    }
}

impl ExecutionError {
    pub fn new(kind: impl Into<ExecutionErrorKind>, span: Span) -> Self {
        Self {
            kind: kind.into(),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ExecutionErrorKind::Runtime(e) => e.code(),
            ExecutionErrorKind::ResourceExceeded(_) => ErrorCode::Resource,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ExecutionErrorKind::Runtime(e) => match e {
                RuntimeError::TypeMismatch { .. } => ("T001", None),
                RuntimeError::FloatNotPermitted => (
                    "T002",
                    Some("Integer-only evaluation was requested for this call"),
                ),
                RuntimeError::StringNotPermitted => (
                    "T003",
                    Some("String literals were disabled for this call"),
                ),
                RuntimeError::DivisionByZero => ("D001", None),
                RuntimeError::ModuloByZero => ("D002", None),
                RuntimeError::NegativeShift { .. } => ("D003", None),
                RuntimeError::NegativeExponent { .. } => (
                    "D004",
                    Some("Use a float base or exponent for fractional powers"),
                ),
            },
            ExecutionErrorKind::ResourceExceeded(ResourceExceededError::StackOverflow {
                ..
            }) => ("R003", Some("Reduce nesting or simplify the expression")),
        };

        Diagnostic {
            message: self.kind.to_string(),
            span: self.span.clone(),
            help: help.map(str::to_string),
            code: code.to_string(),
        }
    }
}
