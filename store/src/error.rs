use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    /// One or more keys of a multi-key fetch were absent. Distinguishable
    /// from a single-key miss so callers can decide how to degrade it.
    #[error("keys not found: {0:?}")]
    MissingKeys(Vec<String>),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("database is corrupted: {0}")]
    Corruption(String),
}
