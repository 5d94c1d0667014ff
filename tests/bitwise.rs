mod cases;

use exprs::{ErrorCode, Term};

test_case! {
    name: and,
    input: { "0xFF&0x7F" },
    value: { Term::Integer(0x7F) },
}

test_case! {
    name: and_truncates_float,
    input: { "255.5&0x7F" },
    value: { Term::Integer(0x7F) },
}

test_case! {
    name: xor,
    input: { "0xFF^0x7F" },
    value: { Term::Integer(0x80) },
}

test_case! {
    name: or,
    input: { "128.9|64.9" },
    value: { Term::Integer(0xC0) },
}

test_case! {
    name: negative_float_truncates_toward_zero,
    input: { "-3.9 & -1" },
    value: { Term::Integer(-3) },
}

test_case! {
    name: large_integer_is_not_rounded,
    input: { "9007199254740993 | 0" },
    value: { Term::Integer(9007199254740993) },
}

test_case! {
    name: shift_left,
    input: { "1<<4" },
    value: { Term::Integer(16) },
}

test_case! {
    name: shift_into_sign_bit,
    input: { "1 << 63" },
    value: { Term::Integer(i64::MIN) },
}

test_case! {
    name: shift_left_past_width,
    input: { "1 << 64" },
    value: { Term::Integer(0) },
}

test_case! {
    name: shift_right_is_arithmetic,
    input: { "-16 >> 2" },
    value: { Term::Integer(-4) },
}

test_case! {
    name: shift_right_past_width,
    input: { "-1 >> 70" },
    value: { Term::Integer(-1) },
}

test_case! {
    name: shift_truncates_float_amount,
    input: { "32.1>>2.1" },
    value: { Term::Integer(8) },
}

test_case! {
    name: negative_shift,
    input: { "1 << -1" },
    error: { ErrorCode::Domain },
    diagnostic: { "D003" },
}

test_case! {
    name: string_operand,
    input: { r#""abc"&1"# },
    error: { ErrorCode::Type },
    diagnostic: { "T001" },
}

test_case! {
    name: complement_zero,
    input: { "~0" },
    value: { Term::Integer(-1) },
}
