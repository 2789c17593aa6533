//! Hosting adapters for the bank aggregate.

pub mod in_memory;
