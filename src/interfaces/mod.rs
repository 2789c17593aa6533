//! Outer surface of the crate: commands replayed from files against a bank,
//! and the CSV/JSON plumbing around them.

pub mod command;
pub mod csv;
