//! Ledger storage trait — the append-only, height-ordered block sequence.

use std::collections::HashMap;

use crate::StoreError;
use chainview_types::{Block, BlockHash, BlockHeader, Transaction, TxHash};

/// Trait for read access to the finalized ledger.
///
/// The ledger is immutable history: blocks and transactions never change
/// once persisted, and the backend provides whatever isolation is needed
/// for consistent point-in-time reads.
pub trait LedgerStore {
    /// List blocks in descending height order.
    ///
    /// `before_height` is an exclusive upper bound; `None` starts from the
    /// most recent block. A `limit` of zero or less means unlimited.
    fn list_blocks(
        &self,
        before_height: Option<u64>,
        limit: i64,
    ) -> Result<Vec<Block>, StoreError>;

    /// Retrieve a block by hash. Fails with `NotFound` when absent.
    fn get_block(&self, hash: &BlockHash) -> Result<Block, StoreError>;

    /// Multi-key transaction fetch, keyed by hash.
    ///
    /// Returns a keyed mapping rather than a positional list so a partial
    /// miss is detected by key presence. Fails with `MissingKeys` when one
    /// or more requested hashes are absent.
    fn get_transactions(
        &self,
        hashes: &[TxHash],
    ) -> Result<HashMap<TxHash, Transaction>, StoreError>;

    /// The header of the block containing a transaction, or `None` if the
    /// transaction is known but not yet included in a block.
    fn block_containing(&self, tx: &TxHash) -> Result<Option<BlockHeader>, StoreError>;

    /// Latest asset-definition blobs, keyed by the asset's canonical text
    /// form. Absent keys are simply omitted from the result.
    fn asset_definitions(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, Vec<u8>>, StoreError>;
}
