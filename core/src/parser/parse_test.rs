//! Tests for parse trees, spans and parse errors.

use bumpalo::Bump;
use pretty_assertions::assert_eq;

use super::{
    BinaryOp, Expr, Literal, ParseError, ParseErrorKind, ParserOptions, Span, UnaryOp, parse,
    parse_with_max_depth, parse_with_options,
};
use crate::api::ErrorCode;

fn display(source: &str) -> String {
    let arena = Bump::new();
    let parsed = parse(&arena, source)
        .unwrap_or_else(|e| panic!("Expression parsing failed: {}\n{}", source, e));
    parsed.expr.to_string()
}

fn parse_error(source: &str) -> ParseError {
    let arena = Bump::new();
    match parse(&arena, source) {
        Ok(parsed) => panic!("{source:?} parsed as {}", parsed.expr),
        Err(error) => error,
    }
}

#[test]
fn test_literal_values() {
    let arena = Bump::new();
    let parsed = parse(&arena, r#""plain\"S\"tring""#).unwrap();
    assert_eq!(*parsed.expr, Expr::Literal(Literal::Str(r#"plain"S"tring"#)));

    let parsed = parse(&arena, "0b101").unwrap();
    assert_eq!(*parsed.expr, Expr::Literal(Literal::Int(5)));
}

#[test]
fn test_tree_shape() {
    let arena = Bump::new();
    let parsed = parse(&arena, "-1 * 2.5").unwrap();
    let Expr::Binary { op, left, right } = parsed.expr else {
        panic!("expected a binary expression, got {:?}", parsed.expr);
    };
    assert_eq!(*op, BinaryOp::Mul);
    assert_eq!(
        **left,
        Expr::Unary {
            op: UnaryOp::Neg,
            expr: &Expr::Literal(Literal::Int(1)),
        }
    );
    assert_eq!(**right, Expr::Literal(Literal::Float(2.5)));
}

#[test]
fn test_display_is_fully_parenthesized() {
    assert_eq!(display("1+2*3"), "(1 + (2 * 3))");
    assert_eq!(display("-2**2"), "((-2) ** 2)");
    assert_eq!(display("'a' + 1.0"), r#"("a" + 1.0)"#);
}

#[test]
fn test_spans() {
    let arena = Bump::new();
    let parsed = parse(&arena, "(1 + 2) * 3").unwrap();
    assert_eq!(parsed.ann.span_of(parsed.expr), Some(Span::new(0, 11)));

    let Expr::Binary { left, right, .. } = parsed.expr else {
        panic!("expected a binary expression");
    };
    // The inner node covers the expression without the parentheses.
    assert_eq!(parsed.ann.span_of(left), Some(Span::new(1, 6)));
    assert_eq!(parsed.ann.span_of(right), Some(Span::new(10, 11)));
    assert_eq!(parsed.ann.snippet(Span::new(1, 6)), "1 + 2");
}

#[test]
fn test_empty_expression() {
    for source in ["", "   ", "\n\t"] {
        assert_eq!(parse_error(source).kind, ParseErrorKind::EmptyExpression);
    }
}

#[test]
fn test_unexpected_end() {
    let error = parse_error("1+");
    assert!(matches!(error.kind, ParseErrorKind::UnexpectedEnd { .. }));
    assert_eq!(error.span, Span::new(1, 2));
    assert_eq!(error.code(), ErrorCode::Syntax);

    assert!(matches!(
        parse_error("-").kind,
        ParseErrorKind::UnexpectedEnd { .. }
    ));
    assert!(matches!(
        parse_error("(").kind,
        ParseErrorKind::UnexpectedEnd { .. }
    ));
}

#[test]
fn test_missing_operand() {
    let error = parse_error("1 * / 2");
    assert_eq!(
        error.kind,
        ParseErrorKind::MissingOperand {
            found: "operator '/'".to_string()
        }
    );
    assert_eq!(error.span, Span::new(4, 5));
    assert!(matches!(
        parse_error(")").kind,
        ParseErrorKind::MissingOperand { .. }
    ));
}

#[test]
fn test_unbalanced_paren() {
    let error = parse_error("(1 + 2");
    assert_eq!(
        error.kind,
        ParseErrorKind::UnbalancedParen {
            found: "end of input".to_string()
        }
    );
    assert_eq!(error.span, Span::new(0, 1));
}

#[test]
fn test_dangling_tokens() {
    let error = parse_error("1 + 2)");
    assert_eq!(
        error.kind,
        ParseErrorKind::DanglingTokens {
            found: "')'".to_string()
        }
    );
    assert_eq!(error.span, Span::new(5, 6));
    assert!(matches!(
        parse_error("1 2").kind,
        ParseErrorKind::DanglingTokens { .. }
    ));
}

#[test]
fn test_lexical_errors_surface() {
    let error = parse_error("1 + #");
    assert_eq!(
        error.kind,
        ParseErrorKind::UnknownCharacter {
            found: "#".to_string()
        }
    );
    assert_eq!(error.code(), ErrorCode::Lexical);
    assert_eq!(
        parse_error("'open").kind,
        ParseErrorKind::UnterminatedString
    );
}

#[test]
fn test_max_depth() {
    let arena = Bump::new();
    let nested = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    assert!(parse_with_max_depth(&arena, &nested, 20).is_ok());

    let error = parse_with_max_depth(&arena, &nested, 5).unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::MaxDepthExceeded { max_depth: 5 });
    assert_eq!(error.code(), ErrorCode::Resource);

    let unary = "-".repeat(10) + "1";
    assert!(parse_with_max_depth(&arena, &unary, 5).is_err());
}

#[test]
fn test_deep_nesting_stops_at_limit() {
    let arena = Bump::new();
    let nested = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let error = parse_with_max_depth(&arena, &nested, 64).unwrap_err();
    assert!(matches!(
        error.kind,
        ParseErrorKind::MaxDepthExceeded { .. }
    ));
}

#[test]
fn test_out_of_memory() {
    let arena = Bump::new();
    arena.set_allocation_limit(Some(0));
    let error = parse_with_options(&arena, "1 + 2", &ParserOptions::default()).unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::OutOfMemory);
    assert_eq!(error.code(), ErrorCode::Resource);
}

#[test]
fn test_verbose_parse() {
    crate::test_utils::init_test_logging();
    let arena = Bump::new();
    let options = ParserOptions {
        verbose: 2,
        ..ParserOptions::default()
    };
    let parsed = parse_with_options(&arena, "1 << 2", &options).unwrap();
    assert_eq!(parsed.expr.to_string(), "(1 << 2)");
}
