//! Block listing and summaries.

use tracing::debug;

use chainview_store::{LedgerStore, NodeStore, StoreError};
use chainview_types::BlockHash;

use crate::views::{wall_clock, BlockSummary, ListBlocksItem};
use crate::{cursor, Explorer, ExplorerError};

impl<L: LedgerStore, N: NodeStore> Explorer<L, N> {
    /// Paginate the block sequence in descending height order.
    ///
    /// An empty `cursor` starts from the most recent block; otherwise the
    /// cursor bounds the page to blocks strictly older than the encoded
    /// height. The returned cursor is set only when the page came back
    /// exactly full, so an empty cursor always means the end of the
    /// sequence (or an unlimited request).
    pub fn list_blocks(
        &self,
        cursor: &str,
        limit: i64,
    ) -> Result<(Vec<ListBlocksItem>, Option<String>), ExplorerError> {
        let before = cursor::parse(cursor)?;
        let blocks = self
            .ledger
            .list_blocks(before, limit)
            .map_err(|e| ExplorerError::store("listing blocks", e))?;

        let items: Vec<ListBlocksItem> = blocks
            .iter()
            .map(|b| ListBlocksItem {
                id: b.hash(),
                height: b.height(),
                time: wall_clock(b.timestamp()),
                transaction_count: b.transactions.len(),
            })
            .collect();

        let next = cursor::next(items.len(), limit, items.last().map(|i| i.height));
        debug!(returned = items.len(), has_next = next.is_some(), "listed blocks");
        Ok((items, next))
    }

    /// Header data for one block: hash, height, time, and the contained
    /// transaction ids in canonical on-chain order.
    pub fn get_block_summary(&self, hash: &BlockHash) -> Result<BlockSummary, ExplorerError> {
        let block = self.ledger.get_block(hash).map_err(|e| match e {
            StoreError::NotFound(_) => ExplorerError::NotFound(format!("block {hash}")),
            other => ExplorerError::store("fetching block", other),
        })?;

        let transaction_ids = block.transactions.iter().map(|tx| tx.hash()).collect();

        Ok(BlockSummary {
            id: block.hash(),
            height: block.height(),
            time: wall_clock(block.timestamp()),
            transaction_count: block.transactions.len(),
            transaction_ids,
        })
    }
}
