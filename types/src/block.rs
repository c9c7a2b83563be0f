//! The immutable block model.
//!
//! Heights are dense and strictly increasing; height is the sole pagination
//! key. The header commits to the ordered transaction hashes via `tx_root`,
//! so a block hash is computable from the header alone.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

use crate::hash::BlockHash;
use crate::time::Timestamp;
use crate::transaction::Transaction;

/// Block header fields, sufficient to compute the block hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u64,
    pub previous: BlockHash,
    pub timestamp: Timestamp,
    /// Blake2b-256 commitment over the ordered transaction hashes.
    pub tx_root: [u8; 32],
}

impl BlockHeader {
    /// Deterministic Blake2b-256 content hash of the header.
    pub fn hash(&self) -> BlockHash {
        let mut hasher = Blake2b::<U32>::new();
        hasher.update(self.height.to_le_bytes());
        hasher.update(self.previous.as_bytes());
        hasher.update(self.timestamp.as_secs().to_le_bytes());
        hasher.update(self.tx_root);
        BlockHash::new(hasher.finalize().into())
    }
}

/// An immutable block: header plus the ordered contained transactions.
///
/// The transaction order is canonical and must be preserved by every
/// consumer; it is never re-sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block, computing the transaction commitment.
    pub fn new(
        height: u64,
        previous: BlockHash,
        timestamp: Timestamp,
        transactions: Vec<Transaction>,
    ) -> Self {
        let mut hasher = Blake2b::<U32>::new();
        for tx in &transactions {
            hasher.update(tx.hash().as_bytes());
        }
        Self {
            header: BlockHeader {
                height,
                previous,
                timestamp,
                tx_root: hasher.finalize().into(),
            },
            transactions,
        }
    }

    pub fn hash(&self) -> BlockHash {
        self.header.hash()
    }

    pub fn height(&self) -> u64 {
        self.header.height
    }

    pub fn timestamp(&self) -> Timestamp {
        self.header.timestamp
    }
}
