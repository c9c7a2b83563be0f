//! The immutable transaction model.
//!
//! A transaction has exactly one of two shapes: *issuance* (creates new
//! units of an asset, no real predecessor) or *transfer* (consumes one or
//! more prior outputs). The shape is carried structurally by the input
//! variants and decided once via [`Transaction::classify`], so downstream
//! consumers never re-derive it ad hoc.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

use crate::asset::AssetId;
use crate::hash::TxHash;

/// Reference to a prior output: (transaction hash, ordinal index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub tx: TxHash,
    pub index: u32,
}

/// A transaction input.
///
/// Issuance inputs carry only metadata and the asset-definition blob; they
/// have no previous output. Transfer inputs reference the output they spend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxInput {
    Issuance {
        metadata: Vec<u8>,
        asset_definition: Vec<u8>,
    },
    Transfer {
        previous: OutPoint,
        metadata: Vec<u8>,
    },
}

impl TxInput {
    /// The previous output spent by this input, if it has one.
    pub fn previous(&self) -> Option<&OutPoint> {
        match self {
            TxInput::Issuance { .. } => None,
            TxInput::Transfer { previous, .. } => Some(previous),
        }
    }
}

/// A transaction output: a spendable unit of value at a fixed ordinal
/// position within its transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub asset_id: AssetId,
    pub amount: u64,
    pub script: Vec<u8>,
    pub metadata: Vec<u8>,
}

/// Transaction shape, decided once at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxClass {
    Issuance,
    Transfer,
}

/// An immutable ledger transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub metadata: Vec<u8>,
}

impl Transaction {
    /// A transaction is an issuance iff no input carries a previous-output
    /// reference.
    pub fn classify(&self) -> TxClass {
        if self.inputs.iter().all(|i| i.previous().is_none()) {
            TxClass::Issuance
        } else {
            TxClass::Transfer
        }
    }

    /// Deterministic Blake2b-256 content hash over a length-framed encoding
    /// of inputs, outputs, and metadata.
    pub fn hash(&self) -> TxHash {
        let mut hasher = Blake2b::<U32>::new();

        hasher.update((self.inputs.len() as u64).to_le_bytes());
        for input in &self.inputs {
            match input {
                TxInput::Issuance {
                    metadata,
                    asset_definition,
                } => {
                    hasher.update([0u8]);
                    update_framed(&mut hasher, metadata);
                    update_framed(&mut hasher, asset_definition);
                }
                TxInput::Transfer { previous, metadata } => {
                    hasher.update([1u8]);
                    hasher.update(previous.tx.as_bytes());
                    hasher.update(previous.index.to_le_bytes());
                    update_framed(&mut hasher, metadata);
                }
            }
        }

        hasher.update((self.outputs.len() as u64).to_le_bytes());
        for output in &self.outputs {
            hasher.update(output.asset_id.as_bytes());
            hasher.update(output.amount.to_le_bytes());
            update_framed(&mut hasher, &output.script);
            update_framed(&mut hasher, &output.metadata);
        }

        update_framed(&mut hasher, &self.metadata);

        TxHash::new(hasher.finalize().into())
    }
}

fn update_framed(hasher: &mut Blake2b<U32>, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
