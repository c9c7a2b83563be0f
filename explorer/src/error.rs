//! Explorer error types.

use chainview_store::StoreError;
use chainview_types::ParseHashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Requested block, transaction, or asset does not exist. A multi-key
    /// miss while resolving inputs is deliberately downgraded to this same
    /// shape.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed pagination cursor supplied by the caller.
    #[error("invalid cursor: {0:?}")]
    InvalidCursor(String),

    /// Stored transaction state that violates a structural invariant.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// An asset-store key failed to parse as an asset identifier. The key
    /// came from the store itself, so this is corrupted state, not a
    /// caller error.
    #[error("invalid asset id {key:?}: {source}")]
    InvalidAssetKey {
        key: String,
        source: ParseHashError,
    },

    /// Opaque storage failure, passed through with minimal context.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: StoreError,
    },
}

impl ExplorerError {
    /// Wrap an opaque storage error with call-site context.
    pub(crate) fn store(context: &'static str, source: StoreError) -> Self {
        ExplorerError::Store { context, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExplorerError::NotFound(_))
    }
}
