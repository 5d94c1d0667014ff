pub mod term;

pub use term::{Term, TermType, write_float};
