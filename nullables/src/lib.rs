//! Nullable infrastructure for deterministic testing.
//!
//! Both collaborator stores of the explorer are abstracted behind traits.
//! This crate provides test-friendly in-memory implementations that return
//! deterministic values, can be seeded programmatically, and never touch
//! the filesystem or network.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod store;

pub use store::{NullLedgerStore, NullNodeStore};
