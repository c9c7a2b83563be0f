//! Abstract storage traits for the chainview explorer.
//!
//! The explorer is a pure read layer over two collaborator stores: the
//! immutable ledger store (blocks, transactions, on-chain asset
//! definitions) and the issuer-side node store (confirmed circulation).
//! Every backend implements these traits; the explorer depends only on
//! the traits.

pub mod error;
pub mod ledger;
pub mod node;

pub use error::StoreError;
pub use ledger::LedgerStore;
pub use node::{AssetCirculation, NodeStore};
