use exprs_core::parser::{LexErrorKind, Lexer, Token};
use reedline::{ValidationResult, Validator};

/// Keeps the prompt open while the input has more `(` than `)`, or ends
/// inside a string literal.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(0) => ValidationResult::Complete,
            Some(_) => ValidationResult::Incomplete,
            // Let the evaluator report every other lexical error.
            None => ValidationResult::Complete,
        }
    }
}

/// Count of parentheses still open at the end of `buffer`.
///
/// An unterminated string counts as one more open level. `None` means the
/// input has a lexical error that more lines cannot fix.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token in Lexer::new(buffer) {
        match token {
            Ok(spanned) => match spanned.token {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                _ => {}
            },
            Err((LexErrorKind::UnterminatedString, _)) => return Some(depth.max(0) as usize + 1),
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}
