use core::fmt;

use super::syntax::{AnnotatedSource, BinaryOp, UnaryOp};

/// A parsed expression together with the spans of each of its nodes.
#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

#[derive(Debug, PartialEq)]
pub enum Expr<'a> {
    Literal(Literal<'a>),
    Unary {
        op: UnaryOp,
        expr: &'a Expr<'a>,
    },
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Int(i64),
    Float(f64),
    /// Unescaped string contents.
    Str(&'a str),
}

// Fully parenthesized rendering, used by `--debug-parse` and by tests.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::Int(value)) => write!(f, "{}", value),
            Expr::Literal(Literal::Float(value)) => write!(f, "{:?}", value),
            Expr::Literal(Literal::Str(value)) => write!(f, "{:?}", value),
            Expr::Unary { op, expr } => write!(f, "({}{})", op, expr),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
