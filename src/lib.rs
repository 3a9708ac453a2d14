//! Compiles a fragment grammar (category tag -> candidate word fragments) into
//! the flat lookup tables consumed by a pattern-driven name generator.

pub mod dev;
pub mod grammar;
pub mod tables;

pub use grammar::{Category, Grammar, builtin};
pub use tables::{CompileError, Tables, build_tables};
