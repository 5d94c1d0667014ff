//! Helpers for the textual forms of literals.

pub mod string_literal;
