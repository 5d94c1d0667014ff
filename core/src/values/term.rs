//! The dynamically-typed scalar produced by evaluating any (sub)expression.
//!
//! A [`Term`] is a closed sum: every operator matches on it exhaustively, so
//! adding a kind forces every operator to decide what to do with it.
//!
//! `Term::String` owns its buffer. It never aliases the expression text or
//! another term, and it is released when the term is dropped.

use core::fmt::{self, Write};

use crate::syntax::string_literal::{QuoteStyle, escape_string};

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Integer(i64),
    Float(f64),
    String(String),
}

/// The kind of a [`Term`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermType {
    Integer,
    Float,
    String,
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermType::Integer => f.write_str("Integer"),
            TermType::Float => f.write_str("Float"),
            TermType::String => f.write_str("String"),
        }
    }
}

impl Term {
    pub fn term_type(&self) -> TermType {
        match self {
            Term::Integer(_) => TermType::Integer,
            Term::Float(_) => TermType::Float,
            Term::String(_) => TermType::String,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Term::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Term::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::String(value) => Some(value),
            _ => None,
        }
    }

    /// Truth value used by `&&`, `||` and `!`: nonzero numbers and non-empty
    /// strings are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Term::Integer(value) => *value != 0,
            Term::Float(value) => *value != 0.0,
            Term::String(value) => !value.is_empty(),
        }
    }

    /// Integer view used by bitwise operators: integers pass through, floats
    /// truncate toward zero (saturating at the `i64` range, NaN becomes 0).
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Term::Integer(value) => Some(*value),
            Term::Float(value) => Some(*value as i64),
            Term::String(_) => None,
        }
    }

    /// Float view used when either side of an arithmetic operator is a float.
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Term::Integer(value) => Some(*value as f64),
            Term::Float(value) => Some(*value),
            Term::String(_) => None,
        }
    }

    /// Source-like rendering: floats always show a fraction or exponent and
    /// strings are quoted, so the output lexes back to an equal term.
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_literal(&mut out);
        out
    }

    fn write_literal(&self, out: &mut String) -> fmt::Result {
        match self {
            Term::Integer(value) => write!(out, "{}", value),
            Term::Float(value) => {
                let start = out.len();
                write_float(out, *value)?;
                let rendered = &out[start..];
                if value.is_finite() && !rendered.contains(['.', 'e']) {
                    out.push_str(".0");
                }
                Ok(())
            }
            Term::String(value) => escape_string(out, value, QuoteStyle::PreferDouble),
        }
    }
}

/// Textual form used by string concatenation: integers in plain decimal,
/// floats via [`write_float`], strings as their raw contents.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Integer(value) => write!(f, "{}", value),
            Term::Float(value) => write_float(f, *value),
            Term::String(value) => f.write_str(value),
        }
    }
}

/// Compact rendering of a float: the shortest decimal that round-trips
/// (`6.0` is `6`, `1.2` is `1.2`), switching to exponent form for very large
/// or very small magnitudes.
pub fn write_float(f: &mut impl Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-5) {
        write!(f, "{:e}", value)
    } else {
        write!(f, "{}", value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Integer(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Integer(i64::from(value))
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::String(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::String(value.to_string())
    }
}
