//! Tokenizer for expression text.
//!
//! Built on `logos`, which already resolves longest matches: `**` wins over
//! `*`, `<=` over `<`, `0x1F` over `0`, and a closed string literal over the
//! unterminated form that would otherwise match the same prefix.

use logos::Logos;

use super::syntax::{BinaryOp, Span, UnaryOp};

/// Reasons a piece of input could not be turned into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    UnknownCharacter,
    /// A string literal reached the end of input without its closing quote.
    UnterminatedString,
    /// A digit that is not valid for the literal's base.
    InvalidDigit { radix: u32, digit: char },
    /// A base prefix (`0x`, `0d`, `0b`) with no digits after it.
    MissingDigits { radix: u32 },
    /// The literal needs more than 64 bits.
    IntegerOverflow,
    /// The text looked like a float but could not be parsed as one.
    InvalidFloat,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", lex_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", lex_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", lex_float)]
    Float(f64),

    #[regex(r"[0-9]+", |lex| lex_radix(lex.slice(), 10))]
    #[regex(r"0x[0-9A-Za-z_]*", |lex| lex_radix(&lex.slice()[2..], 16))]
    #[regex(r"0d[0-9A-Za-z_]*", |lex| lex_radix(&lex.slice()[2..], 10))]
    #[regex(r"0b[0-9A-Za-z_]*", |lex| lex_radix(&lex.slice()[2..], 2))]
    Int(i64),

    /// A quoted literal, quotes and escapes included. See
    /// [`unescape_string`](crate::syntax::string_literal::unescape_string).
    #[regex(r#""(?:[^"\\]|\\(?:.|\n))*""#, |lex| lex.slice())]
    #[regex(r#"'(?:[^'\\]|\\(?:.|\n))*'"#, |lex| lex.slice())]
    Str(&'src str),

    // Same shapes without the closing quote: only chosen when no closed
    // literal matches, i.e. when the input ends inside the string.
    #[regex(r#""(?:[^"\\]|\\(?:.|\n))*\\?"#, unterminated)]
    #[regex(r#"'(?:[^'\\]|\\(?:.|\n))*\\?"#, unterminated)]
    Unterminated,

    #[token("**")]
    StarStar,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    /// Never produced by logos; [`Lexer::next_token`] returns it once the
    /// input is exhausted.
    Eoi,
}

impl Token<'_> {
    /// The binary operator this token denotes, if any.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        let op = match self {
            Token::PipePipe => BinaryOp::Or,
            Token::AmpAmp => BinaryOp::And,
            Token::Pipe => BinaryOp::BitOr,
            Token::Caret => BinaryOp::BitXor,
            Token::Amp => BinaryOp::BitAnd,
            Token::EqEq => BinaryOp::Eq,
            Token::BangEq => BinaryOp::Neq,
            Token::Lt => BinaryOp::Lt,
            Token::Le => BinaryOp::Le,
            Token::Gt => BinaryOp::Gt,
            Token::Ge => BinaryOp::Ge,
            Token::Shl => BinaryOp::Shl,
            Token::Shr => BinaryOp::Shr,
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Percent => BinaryOp::Mod,
            Token::StarStar => BinaryOp::Pow,
            _ => return None,
        };
        Some(op)
    }

    /// The prefix operator this token denotes, if any.
    pub fn unary_op(&self) -> Option<UnaryOp> {
        match self {
            Token::Plus => Some(UnaryOp::Plus),
            Token::Minus => Some(UnaryOp::Neg),
            Token::Tilde => Some(UnaryOp::Complement),
            Token::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// Short human-readable name, used in error messages.
    pub fn describe(&self) -> String {
        let symbol = match self {
            Token::Float(_) | Token::Int(_) => return "number".to_string(),
            Token::Str(_) | Token::Unterminated => return "string".to_string(),
            Token::Eoi => return "end of input".to_string(),
            Token::LParen => return "'('".to_string(),
            Token::RParen => return "')'".to_string(),
            Token::StarStar => "**",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::Le => "<=",
            Token::Ge => ">=",
            Token::EqEq => "==",
            Token::BangEq => "!=",
            Token::AmpAmp => "&&",
            Token::PipePipe => "||",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Tilde => "~",
            Token::Bang => "!",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Amp => "&",
            Token::Pipe => "|",
            Token::Caret => "^",
        };
        format!("operator '{}'", symbol)
    }
}

fn lex_float<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::InvalidFloat)
}

fn unterminated<'src>(_: &mut logos::Lexer<'src, Token<'src>>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

/// Accumulate `digits` in `radix` as an unsigned 64-bit value and reinterpret
/// the bit pattern as `i64`, so `0xFFFFFFFFFFFFFFFF` is `-1`.
fn lex_radix(digits: &str, radix: u32) -> Result<i64, LexErrorKind> {
    if digits.is_empty() {
        return Err(LexErrorKind::MissingDigits { radix });
    }
    let mut value: u64 = 0;
    for ch in digits.chars() {
        let digit = ch
            .to_digit(radix)
            .ok_or(LexErrorKind::InvalidDigit { radix, digit: ch })?;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(LexErrorKind::IntegerOverflow)?;
    }
    Ok(value as i64)
}

/// A token and where it sits in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

/// Pull-based token stream over one expression.
///
/// Wraps the logos lexer to add the end-of-input marker and to attach spans
/// to both tokens and errors.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token<'src>>,
    source: &'src str,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Token::lexer(source),
            source,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Produce the next token, or [`Token::Eoi`] once the input is exhausted.
    /// Keeps returning `Eoi` after that.
    pub fn next_token(&mut self) -> Result<Spanned<'src>, (LexErrorKind, Span)> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(Spanned {
                token,
                span: self.inner.span().into(),
            }),
            Some(Err(kind)) => Err((kind, self.error_span(kind))),
            None => {
                let end = self.source.len();
                Ok(Spanned {
                    token: Token::Eoi,
                    span: Span::new(end, end),
                })
            }
        }
    }

    // An unknown character is reported alone, not with whatever logos
    // consumed while trying to match it.
    fn error_span(&self, kind: LexErrorKind) -> Span {
        let span = self.inner.span();
        match kind {
            LexErrorKind::UnknownCharacter => {
                let width = self.source[span.start..]
                    .chars()
                    .next()
                    .map_or(0, char::len_utf8);
                Span::new(span.start, span.start + width)
            }
            _ => span.into(),
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Spanned<'src>, (LexErrorKind, Span)>;

    /// Like [`Lexer::next_token`], but ends the iteration instead of yielding `Eoi`.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Spanned {
                token: Token::Eoi, ..
            }) => None,
            other => Some(other),
        }
    }
}
