//! Fundamental types for the chainview explorer.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: hashes, asset identifiers, byte blobs, timestamps, and the
//! immutable ledger data model (blocks, transactions, inputs, outputs).

pub mod asset;
pub mod block;
pub mod bytes;
pub mod hash;
pub mod time;
pub mod transaction;

mod serde_hex;

pub use asset::{AssetId, DefinitionHash};
pub use block::{Block, BlockHeader};
pub use bytes::HexBytes;
pub use hash::{BlockHash, ParseHashError, TxHash};
pub use time::Timestamp;
pub use transaction::{OutPoint, Transaction, TxClass, TxInput, TxOutput};
