use thiserror::Error;

use super::lexer::LexErrorKind;
use super::syntax::Span;
use crate::api::{Diagnostic, ErrorCode};

/// Parser error with the span it refers to.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors.
///
/// Covers both lexical errors (bad input text) and syntax errors (bad token
/// sequence), plus the resource limits that parsing itself can hit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("Unknown character '{found}'")]
    UnknownCharacter { found: String },
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Invalid digit '{digit}' in base-{radix} literal")]
    InvalidDigit { radix: u32, digit: char },
    #[error("Base-{radix} literal has no digits")]
    MissingDigits { radix: u32 },
    #[error("Integer literal does not fit in 64 bits")]
    IntegerOverflow,
    #[error("Invalid floating-point literal")]
    InvalidFloat,

    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: String },
    #[error("Expected an operand, found {found}")]
    MissingOperand { found: String },
    #[error("Unbalanced parenthesis: expected ')', found {found}")]
    UnbalancedParen { found: String },
    #[error("Unexpected {found} after the end of the expression")]
    DanglingTokens { found: String },

    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize },
    #[error("Out of memory while parsing")]
    OutOfMemory,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Build the error for a lexer failure at `span` of `source`.
    pub fn from_lex(kind: LexErrorKind, span: Span, source: &str) -> Self {
        let kind = match kind {
            LexErrorKind::UnknownCharacter => ParseErrorKind::UnknownCharacter {
                found: span.str_of(source).to_string(),
            },
            LexErrorKind::UnterminatedString => ParseErrorKind::UnterminatedString,
            LexErrorKind::InvalidDigit { radix, digit } => {
                ParseErrorKind::InvalidDigit { radix, digit }
            }
            LexErrorKind::MissingDigits { radix } => ParseErrorKind::MissingDigits { radix },
            LexErrorKind::IntegerOverflow => ParseErrorKind::IntegerOverflow,
            LexErrorKind::InvalidFloat => ParseErrorKind::InvalidFloat,
        };
        Self::new(kind, span)
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnknownCharacter { .. } => ("L001", None),
            ParseErrorKind::UnterminatedString => (
                "L002",
                Some("Close the string with the quote character it was opened with"),
            ),
            ParseErrorKind::InvalidDigit { .. } => ("L003", Some("Check the number format")),
            ParseErrorKind::MissingDigits { .. } => ("L004", Some("Check the number format")),
            ParseErrorKind::IntegerOverflow => ("L005", None),
            ParseErrorKind::InvalidFloat => ("L006", Some("Check the number format")),
            ParseErrorKind::EmptyExpression => ("P001", None),
            ParseErrorKind::UnexpectedEnd { .. } => ("P002", None),
            ParseErrorKind::MissingOperand { .. } => ("P003", None),
            ParseErrorKind::UnbalancedParen { .. } => {
                ("P004", Some("Add the missing closing parenthesis"))
            }
            ParseErrorKind::DanglingTokens { .. } => ("P005", None),
            ParseErrorKind::MaxDepthExceeded { .. } => (
                "R001",
                Some("Reduce nesting or simplify the expression"),
            ),
            ParseErrorKind::OutOfMemory => ("R002", None),
        };

        Diagnostic {
            message: self.kind.to_string(),
            span: self.span.clone(),
            help: help.map(str::to_string),
            code: code.to_string(),
        }
    }
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnknownCharacter { .. }
            | ParseErrorKind::UnterminatedString
            | ParseErrorKind::InvalidDigit { .. }
            | ParseErrorKind::MissingDigits { .. }
            | ParseErrorKind::IntegerOverflow
            | ParseErrorKind::InvalidFloat => ErrorCode::Lexical,
            ParseErrorKind::EmptyExpression
            | ParseErrorKind::UnexpectedEnd { .. }
            | ParseErrorKind::MissingOperand { .. }
            | ParseErrorKind::UnbalancedParen { .. }
            | ParseErrorKind::DanglingTokens { .. } => ErrorCode::Syntax,
            ParseErrorKind::MaxDepthExceeded { .. } | ParseErrorKind::OutOfMemory => {
                ErrorCode::Resource
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::MissingOperand {
                found: "')'".to_string(),
            },
            Span(10..11),
        );

        let diagnostic = error.to_diagnostic();
        assert!(diagnostic.message.contains("Expected an operand"));
        assert!(diagnostic.message.contains("found ')'"));
        assert_eq!(diagnostic.code, "P003");
        assert_eq!(diagnostic.span, Span(10..11));
    }

    #[test]
    fn test_lex_error_reports_offending_text() {
        let error = ParseError::from_lex(LexErrorKind::UnknownCharacter, Span(2..3), "1 $ 2");
        assert_eq!(
            error.kind,
            ParseErrorKind::UnknownCharacter {
                found: "$".to_string()
            }
        );
        assert_eq!(error.code(), ErrorCode::Lexical);
    }

    #[test]
    fn test_codes_by_tier() {
        assert_eq!(ParseErrorKind::UnterminatedString.code(), ErrorCode::Lexical);
        assert_eq!(ParseErrorKind::EmptyExpression.code(), ErrorCode::Syntax);
        assert_eq!(
            ParseErrorKind::MaxDepthExceeded { max_depth: 3 }.code(),
            ErrorCode::Resource
        );
    }
}
