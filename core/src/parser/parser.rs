//! Precedence-climbing parser.
//!
//! Each binary operator has a numeric binding power (see
//! [`BinaryOp::precedence`]). `parse_expr(min)` parses one unary operand and
//! then keeps folding in binary operators whose power is at least `min`; the
//! right operand of a left-associative operator is parsed with `power + 1`,
//! that of a right-associative one (`**`) with `power`. Prefix operators bind
//! tighter than any binary operator.

use bumpalo::Bump;
use tracing::{debug, trace};

use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Lexer, Spanned, Token};
use super::parsed_expr::{Expr, Literal, ParsedExpr};
use super::syntax::{AnnotatedSource, LOWEST_PRECEDENCE, Span};
use crate::syntax::string_literal::{strip_quotes, unescape_string};

/// Default limit on how deeply expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 500;

#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum nesting of parentheses, prefix operators and `**` chains.
    pub max_depth: usize,
    /// Diagnostic trace level: 1 logs the parsed tree, 2 also every token.
    pub verbose: u8,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            verbose: 0,
        }
    }
}

/// Parse `source` into an expression tree allocated in `arena`.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom nesting limit.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    let options = ParserOptions {
        max_depth,
        ..ParserOptions::default()
    };
    parse_with_options(arena, source, &options)
}

pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: &ParserOptions,
) -> Result<ParsedExpr<'a>, ParseError> {
    Parser::new(arena, source, options.clone())?.parse()
}

/// A parsed node and the source range it covers (parentheses included).
type Node<'a> = (&'a Expr<'a>, Span);

struct Parser<'a> {
    arena: &'a Bump,
    lexer: Lexer<'a>,
    /// One token of lookahead.
    current: Spanned<'a>,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    options: ParserOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(arena: &'a Bump, source: &'a str, options: ParserOptions) -> Result<Self, ParseError> {
        let ann = arena
            .try_alloc(AnnotatedSource::new(arena, source))
            .map_err(|_| ParseError::new(ParseErrorKind::OutOfMemory, Span::new(0, 0)))?;
        let mut lexer = Lexer::new(source);
        let current = Self::lex(&mut lexer, options.verbose)?;
        Ok(Self {
            arena,
            lexer,
            current,
            ann,
            options,
            depth: 0,
        })
    }

    fn lex(lexer: &mut Lexer<'a>, verbose: u8) -> Result<Spanned<'a>, ParseError> {
        let spanned = lexer
            .next_token()
            .map_err(|(kind, span)| ParseError::from_lex(kind, span, lexer.source()))?;
        if verbose >= 2 {
            trace!(token = ?spanned.token, span = %spanned.span, "token");
        }
        Ok(spanned)
    }

    /// Move to the next token, returning the one just consumed.
    fn advance(&mut self) -> Result<Spanned<'a>, ParseError> {
        let next = Self::lex(&mut self.lexer, self.options.verbose)?;
        Ok(core::mem::replace(&mut self.current, next))
    }

    fn at_end(&self) -> bool {
        matches!(self.current.token, Token::Eoi)
    }

    fn error<T>(&self, kind: ParseErrorKind, span: Span) -> Result<T, ParseError> {
        Err(ParseError::new(kind, span))
    }

    fn alloc(&self, expr: Expr<'a>, span: Span) -> Result<Node<'a>, ParseError> {
        let out_of_memory = || ParseError::new(ParseErrorKind::OutOfMemory, span.clone());
        let node: &'a Expr<'a> = self.arena.try_alloc(expr).map_err(|_| out_of_memory())?;
        self.ann
            .add_span(node, span.clone())
            .map_err(|_| out_of_memory())?;
        Ok((node, span))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return self.error(
                ParseErrorKind::MaxDepthExceeded {
                    max_depth: self.options.max_depth,
                },
                self.current.span.clone(),
            );
        }
        self.depth += 1;
        Ok(())
    }

    fn parse(mut self) -> Result<ParsedExpr<'a>, ParseError> {
        if self.at_end() {
            return self.error(
                ParseErrorKind::EmptyExpression,
                Span::new(0, self.lexer.source().len()),
            );
        }

        let (expr, _) = self.parse_expr(LOWEST_PRECEDENCE)?;

        if !self.at_end() {
            return self.error(
                ParseErrorKind::DanglingTokens {
                    found: self.current.token.describe(),
                },
                self.current.span.clone(),
            );
        }

        if self.options.verbose >= 1 {
            debug!(expr = %expr, "parsed");
        }
        Ok(ParsedExpr {
            expr,
            ann: self.ann,
        })
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Node<'a>, ParseError> {
        self.enter()?;
        let result = self.parse_binary(min_precedence);
        self.depth -= 1;
        result
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Node<'a>, ParseError> {
        let (mut left, mut left_span) = self.parse_unary()?;

        while let Some(op) = self.current.token.binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            let op_token = self.advance()?;
            if self.at_end() {
                return self.error(
                    ParseErrorKind::UnexpectedEnd {
                        expected: format!("an operand after '{}'", op),
                    },
                    op_token.span,
                );
            }

            let next_min = if op.is_right_associative() {
                precedence
            } else {
                precedence + 1
            };
            let (right, right_span) = self.parse_expr(next_min)?;

            let span = Span::combine(&left_span, &right_span);
            (left, left_span) = self.alloc(Expr::Binary { op, left, right }, span)?;
        }

        Ok((left, left_span))
    }

    fn parse_unary(&mut self) -> Result<Node<'a>, ParseError> {
        let Some(op) = self.current.token.unary_op() else {
            return self.parse_primary();
        };

        let op_token = self.advance()?;
        if self.at_end() {
            return self.error(
                ParseErrorKind::UnexpectedEnd {
                    expected: format!("an operand after '{}'", op),
                },
                op_token.span,
            );
        }

        self.enter()?;
        let operand = self.parse_unary();
        self.depth -= 1;
        let (operand, operand_span) = operand?;

        let span = Span::combine(&op_token.span, &operand_span);
        self.alloc(Expr::Unary { op, expr: operand }, span)
    }

    fn parse_primary(&mut self) -> Result<Node<'a>, ParseError> {
        let Spanned { token, span } = self.current.clone();
        match token {
            Token::Int(value) => {
                self.advance()?;
                self.alloc(Expr::Literal(Literal::Int(value)), span)
            }
            Token::Float(value) => {
                self.advance()?;
                self.alloc(Expr::Literal(Literal::Float(value)), span)
            }
            Token::Str(raw) => {
                self.advance()?;
                let text = unescape_string(self.arena, strip_quotes(raw))
                    .map_err(|_| ParseError::new(ParseErrorKind::OutOfMemory, span.clone()))?;
                self.alloc(Expr::Literal(Literal::Str(text)), span)
            }
            Token::LParen => self.parse_grouped(),
            Token::Eoi => self.error(
                ParseErrorKind::UnexpectedEnd {
                    expected: "an operand".to_string(),
                },
                span,
            ),
            other => self.error(
                ParseErrorKind::MissingOperand {
                    found: other.describe(),
                },
                span,
            ),
        }
    }

    fn parse_grouped(&mut self) -> Result<Node<'a>, ParseError> {
        let open = self.advance()?;
        if self.at_end() {
            return self.error(
                ParseErrorKind::UnexpectedEnd {
                    expected: "an expression after '('".to_string(),
                },
                open.span,
            );
        }

        let (inner, _) = self.parse_expr(LOWEST_PRECEDENCE)?;

        if !matches!(self.current.token, Token::RParen) {
            return self.error(
                ParseErrorKind::UnbalancedParen {
                    found: self.current.token.describe(),
                },
                open.span,
            );
        }
        let close = self.advance()?;
        Ok((inner, Span::combine(&open.span, &close.span)))
    }
}
