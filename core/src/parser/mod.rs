mod parsed_expr;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;
pub mod error;
pub mod lexer;

// Re-export the parser entry points for external use
pub use parser::{DEFAULT_MAX_DEPTH, ParserOptions, parse, parse_with_max_depth, parse_with_options};

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{LexErrorKind, Lexer, Spanned, Token};
pub use parsed_expr::{Expr, Literal, ParsedExpr};
pub use syntax::AnnotatedSource;
pub use syntax::{BinaryOp, LOWEST_PRECEDENCE, Span, UNARY_PRECEDENCE, UnaryOp};


#[cfg(test)]
mod parse_test;
