//! Shared helpers for the integration tests.
//!
//! `test_case!` declares one `#[test]` that evaluates an expression in a
//! fresh context and checks either the resulting term or the error code
//! (and optionally the diagnostic code).

#![allow(dead_code)]

use exprs::{Context, Error, ErrorCode, EvalFlags, Term, render_error_to_string_no_color};

#[macro_export]
macro_rules! test_case {
    {
        name: $name:ident,
        input: { $input:expr },
        $(flags: { $flags:expr },)?
        value: { $value:expr },
    } => {
        #[test]
        fn $name() {
            let flags = exprs::EvalFlags::empty() $(| $flags)?;
            $crate::cases::assert_value($input, flags, $value);
        }
    };
    {
        name: $name:ident,
        input: { $input:expr },
        $(flags: { $flags:expr },)?
        error: { $code:expr },
        $(diagnostic: { $diag:expr },)?
    } => {
        #[test]
        fn $name() {
            let flags = exprs::EvalFlags::empty() $(| $flags)?;
            let error = $crate::cases::assert_error($input, flags, $code);
            $(
                assert_eq!(error.diagnostic().code, $diag, "input: {:?}", $input);
            )?
            let _ = error;
        }
    };
}

pub fn evaluate(input: &str, flags: EvalFlags) -> Result<Term, Error> {
    let mut ctx = Context::with_defaults().expect("context creation failed");
    ctx.evaluate(input, flags)
}

pub fn assert_value(input: &str, flags: EvalFlags, expected: Term) {
    match evaluate(input, flags) {
        Ok(term) => pretty_assertions::assert_eq!(term, expected, "input: {:?}", input),
        Err(error) => panic!(
            "{:?} failed to evaluate:\n{}",
            input,
            render_error_to_string_no_color(&error)
        ),
    }
}

pub fn assert_error(input: &str, flags: EvalFlags, expected: ErrorCode) -> Error {
    match evaluate(input, flags) {
        Ok(term) => panic!("{:?} evaluated to {:?}, expected {:?}", input, term, expected),
        Err(error) => {
            assert_eq!(
                error.code(),
                expected,
                "input: {:?}\n{}",
                input,
                render_error_to_string_no_color(&error)
            );
            error
        }
    }
}
