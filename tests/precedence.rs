mod cases;

use exprs::Term;

test_case! {
    name: pow_binds_tighter_than_mul,
    input: { "2+2**2*4/2" },
    value: { Term::Integer(10) },
}

test_case! {
    name: parentheses,
    input: { "1+(2+3)*4" },
    value: { Term::Integer(21) },
}

test_case! {
    name: mul_div_before_add_sub,
    input: { "1+2*3/4-6" },
    value: { Term::Integer(1 + 2 * 3 / 4 - 6) },
}

test_case! {
    name: pow_is_right_associative,
    input: { "2**3**2" },
    value: { Term::Integer(512) },
}

test_case! {
    name: unary_binds_tighter_than_pow,
    input: { "-2**2" },
    value: { Term::Integer(4) },
}

test_case! {
    name: sub_is_left_associative,
    input: { "10 - 4 - 3" },
    value: { Term::Integer(3) },
}

test_case! {
    name: div_is_left_associative,
    input: { "64 / 4 / 2" },
    value: { Term::Integer(8) },
}

test_case! {
    name: mul_and_mod_share_a_row,
    input: { "2 * 3 % 4" },
    value: { Term::Integer(2) },
}

test_case! {
    name: shift_below_add,
    input: { "1 + 2 << 1" },
    value: { Term::Integer(6) },
}

test_case! {
    name: bitwise_rows,
    input: { "1 | 2 ^ 3 & 4" },
    value: { Term::Integer(3) },
}

test_case! {
    name: equality_below_relational,
    input: { "1 < 2 == 1" },
    value: { Term::Integer(1) },
}

test_case! {
    name: and_binds_tighter_than_or,
    input: { "1 || 0 && 0" },
    value: { Term::Integer(1) },
}

test_case! {
    name: bitwise_and_above_logical_and,
    input: { "2 && 1 & 2" },
    value: { Term::Integer(0) },
}

test_case! {
    name: redundant_parentheses,
    input: { "((((1))))" },
    value: { Term::Integer(1) },
}

test_case! {
    name: whitespace_is_insignificant,
    input: { " 2 *\n( 3\t+ 4 ) " },
    value: { Term::Integer(14) },
}
