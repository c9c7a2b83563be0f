//! Read-side query and aggregation engine over a finalized ledger.
//!
//! Turns raw ledger records into denormalized, client-facing views:
//! - block listing with cursor pagination ([`Explorer::list_blocks`])
//! - single-block summaries ([`Explorer::get_block_summary`])
//! - fully-resolved transactions, joining each transfer input against the
//!   output it spends ([`Explorer::get_transaction`])
//! - unified asset views merged from the issuer node's circulation records
//!   and the ledger's latest definitions ([`Explorer::get_assets`])
//!
//! Every operation is a synchronous, stateless, read-only request handler:
//! request, resolve, shape. There is no caching, no background processing,
//! and no mutation; a failed store call fails the whole operation exactly
//! once.

pub mod cursor;
pub mod error;
pub mod views;

mod assets;
mod blocks;
mod transactions;

pub use error::ExplorerError;
pub use views::{
    AssetView, BlockSummary, InputKind, ListBlocksItem, TransactionView, TxInputView,
    TxOutputView,
};

use chainview_store::{LedgerStore, NodeStore};

/// The explorer core, parameterized over its two collaborator stores.
pub struct Explorer<L, N> {
    pub(crate) ledger: L,
    pub(crate) node: N,
}

impl<L: LedgerStore, N: NodeStore> Explorer<L, N> {
    pub fn new(ledger: L, node: N) -> Self {
        Self { ledger, node }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn node(&self) -> &N {
        &self.node
    }
}
