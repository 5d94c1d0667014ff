//! Public error types for the expression engine.
//!
//! Internal parse and evaluation errors are converted to [`Error`] at the
//! API boundary. Every error carries one [`ErrorCode`] tier plus a
//! [`Diagnostic`] pointing into the source text.

use core::fmt;

use thiserror::Error;

use crate::evaluator::ExecutionError;
use crate::parser::{ParseError, Span};

/// Result code of an evaluate call.
///
/// The numeric values are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    /// Malformed literal, unterminated string or unknown character.
    Lexical = 1,
    /// Unbalanced parenthesis, unexpected end, dangling tokens or missing operand.
    Syntax = 2,
    /// Operator applied to an operand type it does not accept.
    Type = 3,
    /// Division or modulo by zero, negative shift or negative integer exponent.
    Domain = 4,
    /// Allocation failure or a configured limit exceeded.
    Resource = 5,
}

impl ErrorCode {
    /// Stable human-readable description of the code.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Lexical => "Lexical error: malformed literal or unrecognized character",
            ErrorCode::Syntax => "Syntax error: malformed expression",
            ErrorCode::Type => "Type error: operand type not accepted by operator",
            ErrorCode::Domain => "Domain error: operand value outside operator domain",
            ErrorCode::Resource => "Resource error: allocation failed or limit exceeded",
        }
    }

    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(ErrorCode::Success),
            1 => Some(ErrorCode::Lexical),
            2 => Some(ErrorCode::Syntax),
            3 => Some(ErrorCode::Type),
            4 => Some(ErrorCode::Domain),
            5 => Some(ErrorCode::Resource),
            _ => None,
        }
    }

    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Human-readable description of `code`.
pub fn error_code_to_string(code: ErrorCode) -> &'static str {
    code.description()
}

/// A single error message with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Error code (e.g., "P001") for documentation lookup.
    pub code: String,
}

/// Public error type for all engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {}", .code, .diagnostic.message)]
pub struct Error {
    code: ErrorCode,
    diagnostic: Diagnostic,
    text: String,
}

impl Error {
    pub(crate) fn new(code: ErrorCode, diagnostic: Diagnostic, text: &str) -> Self {
        Self {
            code,
            diagnostic,
            text: text.to_string(),
        }
    }

    /// Error raised when a context cannot reserve its scratch memory.
    pub(crate) fn out_of_memory(bytes: usize) -> Self {
        let diagnostic = Diagnostic {
            message: format!("Failed to reserve {} bytes of scratch memory", bytes),
            span: Span::default(),
            help: Some("Lower the arena capacity or raise the memory limit".to_string()),
            code: "R004".to_string(),
        };
        Self::new(ErrorCode::Resource, diagnostic, "")
    }

    pub(crate) fn from_parse(error: ParseError, text: &str) -> Self {
        Self::new(error.code(), error.to_diagnostic(), text)
    }

    pub(crate) fn from_execution(error: ExecutionError, text: &str) -> Self {
        Self::new(error.code(), error.to_diagnostic(), text)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// The expression text the error refers to.
    pub fn source_text(&self) -> &str {
        &self.text
    }
}
