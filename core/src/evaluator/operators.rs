//! Binary and unary operator implementations.
//!
//! Every function matches exhaustively on [`Term`], so a new term kind has
//! to be handled here before anything compiles.

use crate::{
    evaluator::RuntimeError,
    parser::{BinaryOp, UnaryOp},
    values::Term,
};

/// Apply a binary operator to two evaluated operands.
pub(super) fn eval_binary(op: BinaryOp, left: Term, right: Term) -> Result<Term, RuntimeError> {
    match op {
        BinaryOp::And | BinaryOp::Or => {
            let result = eval_logical(op, left.is_truthy(), right.is_truthy());
            Ok(Term::from(result))
        }
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor | BinaryOp::Shl | BinaryOp::Shr => {
            let left = integer_operand(op, &left)?;
            let right = integer_operand(op, &right)?;
            eval_binary_int(op, left, right).map(Term::Integer)
        }
        BinaryOp::Add if is_string(&left) || is_string(&right) => {
            Ok(Term::String(format!("{}{}", left, right)))
        }
        _ => match (&left, &right) {
            (Term::String(a), Term::String(b)) if is_comparison(op) => {
                Ok(Term::from(compare_str(op, a, b)))
            }
            (Term::Integer(a), Term::Integer(b)) => eval_binary_int(op, *a, *b).map(Term::Integer),
            (Term::Integer(a), Term::Float(b)) => eval_binary_float(op, *a as f64, *b),
            (Term::Float(a), Term::Integer(b)) => eval_binary_float(op, *a, *b as f64),
            (Term::Float(a), Term::Float(b)) => eval_binary_float(op, *a, *b),
            (Term::String(_), _) => Err(type_mismatch(op.symbol(), &left)),
            (_, Term::String(_)) => Err(type_mismatch(op.symbol(), &right)),
        },
    }
}

/// Apply a prefix operator.
pub(super) fn eval_unary(op: UnaryOp, operand: Term) -> Result<Term, RuntimeError> {
    match operand {
        Term::Integer(value) => Ok(Term::Integer(eval_unary_int(op, value))),
        Term::Float(value) => match op {
            UnaryOp::Plus => Ok(Term::Float(value)),
            UnaryOp::Neg => Ok(Term::Float(-value)),
            UnaryOp::Complement | UnaryOp::Not => {
                Ok(Term::Integer(eval_unary_int(op, value as i64)))
            }
        },
        Term::String(_) => Err(type_mismatch(op.symbol(), &operand)),
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow. Comparisons and
/// logical operators yield 1 or 0.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<i64, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        BinaryOp::Mod => {
            if right == 0 {
                Err(RuntimeError::ModuloByZero)
            } else {
                Ok(left.wrapping_rem(right))
            }
        }
        BinaryOp::Pow => {
            if right < 0 {
                Err(RuntimeError::NegativeExponent { exponent: right })
            } else {
                Ok(wrapping_pow(left, right as u64))
            }
        }
        BinaryOp::BitAnd => Ok(left & right),
        BinaryOp::BitOr => Ok(left | right),
        BinaryOp::BitXor => Ok(left ^ right),
        BinaryOp::Shl => {
            let amount = shift_amount(right)?;
            Ok(if amount >= 64 { 0 } else { left << amount })
        }
        BinaryOp::Shr => {
            let amount = shift_amount(right)?;
            // Arithmetic shift: past the width only the sign remains.
            Ok(left >> amount.min(63))
        }
        BinaryOp::Eq => Ok((left == right).into()),
        BinaryOp::Neq => Ok((left != right).into()),
        BinaryOp::Lt => Ok((left < right).into()),
        BinaryOp::Le => Ok((left <= right).into()),
        BinaryOp::Gt => Ok((left > right).into()),
        BinaryOp::Ge => Ok((left >= right).into()),
        BinaryOp::And | BinaryOp::Or => Ok(eval_logical(op, left != 0, right != 0).into()),
    }
}

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than failing).
/// Bitwise operators truncate both sides toward zero first.
pub(super) fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> Result<Term, RuntimeError> {
    let result = match op {
        BinaryOp::Add => Term::Float(left + right),
        BinaryOp::Sub => Term::Float(left - right),
        BinaryOp::Mul => Term::Float(left * right),
        BinaryOp::Div => Term::Float(left / right), // Division by zero produces inf
        BinaryOp::Mod => Term::Float(left % right), // fmod: sign follows the dividend
        BinaryOp::Pow => Term::Float(left.powf(right)),
        BinaryOp::Eq => Term::from(left == right),
        BinaryOp::Neq => Term::from(left != right),
        BinaryOp::Lt => Term::from(left < right),
        BinaryOp::Le => Term::from(left <= right),
        BinaryOp::Gt => Term::from(left > right),
        BinaryOp::Ge => Term::from(left >= right),
        BinaryOp::And | BinaryOp::Or => Term::from(eval_logical(op, left != 0.0, right != 0.0)),
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor | BinaryOp::Shl | BinaryOp::Shr => {
            Term::Integer(eval_binary_int(op, left as i64, right as i64)?)
        }
    };
    Ok(result)
}

fn eval_unary_int(op: UnaryOp, value: i64) -> i64 {
    match op {
        UnaryOp::Plus => value,
        UnaryOp::Neg => value.wrapping_neg(),
        UnaryOp::Complement => !value,
        UnaryOp::Not => (value == 0).into(),
    }
}

fn eval_logical(op: BinaryOp, left: bool, right: bool) -> bool {
    match op {
        BinaryOp::Or => left || right,
        _ => left && right,
    }
}

/// Bytewise lexicographic comparison of two strings.
fn compare_str(op: BinaryOp, left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    match op {
        BinaryOp::Eq => left == right,
        BinaryOp::Neq => left != right,
        BinaryOp::Lt => left < right,
        BinaryOp::Le => left <= right,
        BinaryOp::Gt => left > right,
        _ => left >= right,
    }
}

fn is_comparison(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::Eq | BinaryOp::Neq | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
    )
}

fn is_string(term: &Term) -> bool {
    matches!(term, Term::String(_))
}

fn integer_operand(op: BinaryOp, term: &Term) -> Result<i64, RuntimeError> {
    term.to_integer()
        .ok_or_else(|| type_mismatch(op.symbol(), term))
}

fn shift_amount(amount: i64) -> Result<u32, RuntimeError> {
    if amount < 0 {
        return Err(RuntimeError::NegativeShift { amount });
    }
    Ok(u32::try_from(amount).unwrap_or(u32::MAX))
}

fn type_mismatch(op: &'static str, operand: &Term) -> RuntimeError {
    RuntimeError::TypeMismatch {
        op,
        found: operand.term_type(),
    }
}

/// Exponentiation by squaring with 64-bit wraparound.
fn wrapping_pow(mut base: i64, mut exponent: u64) -> i64 {
    let mut result: i64 = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.wrapping_mul(base);
        }
    }
    result
}
