/// String literal escaping and unescaping.
///
/// This module converts between:
/// - Runtime strings (the contents of a `Term::String`)
/// - Source string literals, delimited by `"` or `'`
///
/// The literal grammar has a single escape rule: a backslash is dropped and
/// the character after it is kept verbatim. `\"` and `\'` are how a quote
/// appears inside a literal delimited by that quote; `\\` is a backslash and
/// `\n` is simply `n`.
use core::{alloc::Layout, fmt};

use bumpalo::{AllocErr, Bump};

/// Controls which quote style to use when escaping strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Always use single quotes: `'...'`
    AlwaysSingle,
    /// Always use double quotes: `"..."`
    AlwaysDouble,
    /// Prefer single quotes, use double if string contains single quotes but not double
    PreferSingle,
    /// Prefer double quotes, use single if string contains double quotes but not single
    #[default]
    PreferDouble,
}

/// Write `s` as a string literal that lexes back to `s`.
///
/// Only the chosen quote character and backslash need escaping; every other
/// character, control characters included, is written as is.
///
/// # Example
///
/// ```
/// use exprs_core::syntax::string_literal::{QuoteStyle, escape_string};
///
/// let mut output = String::new();
/// escape_string(&mut output, r#"say "hi""#, QuoteStyle::PreferDouble).unwrap();
/// assert_eq!(output, r#"'say "hi"'"#);
/// ```
pub fn escape_string(f: &mut impl fmt::Write, s: &str, style: QuoteStyle) -> fmt::Result {
    let quote = match style {
        QuoteStyle::AlwaysDouble => '"',
        QuoteStyle::AlwaysSingle => '\'',
        QuoteStyle::PreferDouble => {
            if s.contains('"') && !s.contains('\'') {
                '\''
            } else {
                '"'
            }
        }
        QuoteStyle::PreferSingle => {
            if s.contains('\'') && !s.contains('"') {
                '"'
            } else {
                '\''
            }
        }
    };

    f.write_char(quote)?;
    for ch in s.chars() {
        if ch == quote || ch == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    f.write_char(quote)
}

/// Strip the delimiting quotes from a lexed string token.
///
/// The lexer only produces string tokens that start and end with the same
/// quote character, so this never fails on its output.
pub fn strip_quotes(token: &str) -> &str {
    token
        .get(1..token.len().saturating_sub(1))
        .unwrap_or_default()
}

/// Unescape the contents of a string literal (without its quotes).
///
/// Contents without any backslash are returned as is (zero-copy); otherwise
/// the unescaped text is copied into `arena`. Allocation failures are
/// reported rather than aborting, so a context's memory limit can be enforced.
pub fn unescape_string<'a>(arena: &'a Bump, input: &'a str) -> Result<&'a str, AllocErr> {
    if !input.contains('\\') {
        return Ok(input);
    }

    let mut unescaped = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                // A trailing lone backslash is kept; the lexer never produces one.
                unescaped.push(chars.next().unwrap_or('\\'));
            }
            ch => unescaped.push(ch),
        }
    }

    try_alloc_str(arena, &unescaped)
}

/// Copy `s` into `arena`, reporting allocation failure instead of aborting.
fn try_alloc_str<'a>(arena: &'a Bump, s: &str) -> Result<&'a str, AllocErr> {
    let layout = Layout::array::<u8>(s.len()).map_err(|_| AllocErr)?;
    let ptr = arena.try_alloc_layout(layout)?;
    // SAFETY: `ptr` was just allocated with room for `s.len()` bytes and does
    // not overlap `s`. The copied bytes come from a `&str`, so they are UTF-8.
    unsafe {
        core::ptr::copy_nonoverlapping(s.as_ptr(), ptr.as_ptr(), s.len());
        let bytes = core::slice::from_raw_parts(ptr.as_ptr(), s.len());
        Ok(core::str::from_utf8_unchecked(bytes))
    }
}
