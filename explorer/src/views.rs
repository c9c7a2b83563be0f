//! Client-facing view records.
//!
//! Flat, denormalized shapes consumed by an outer transport layer: hashes
//! and byte blobs as hex text, timestamps as RFC 3339 wall-clock text, and
//! optional fields omitted (not null) when empty.

use chrono::{DateTime, Utc};
use serde::Serialize;

use chainview_types::{AssetId, BlockHash, DefinitionHash, HexBytes, Timestamp, TxHash};

/// One row of a paginated block listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListBlocksItem {
    pub id: BlockHash,
    pub height: u64,
    pub time: DateTime<Utc>,
    pub transaction_count: usize,
}

/// Header data for one block plus its ordered transaction ids.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockSummary {
    pub id: BlockHash,
    pub height: u64,
    pub time: DateTime<Utc>,
    pub transaction_count: usize,
    pub transaction_ids: Vec<TxHash>,
}

/// A fully-resolved transaction. The block fields are absent while the
/// transaction is pending (known but not yet included in a block).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionView {
    pub id: TxHash,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<BlockHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_time: Option<DateTime<Utc>>,
    pub inputs: Vec<TxInputView>,
    pub outputs: Vec<TxOutputView>,
    #[serde(skip_serializing_if = "HexBytes::is_empty")]
    pub metadata: HexBytes,
}

/// Input entry classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Issuance,
    Transfer,
}

/// A resolved input entry.
///
/// Transfer entries carry the previous outpoint and the asset/amount read
/// from the output they spend. The single synthesized issuance entry has
/// no outpoint or amount; its asset id is inferred from the transaction's
/// first output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TxInputView {
    #[serde(rename = "type")]
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TxHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_output: Option<u32>,
    pub asset_id: AssetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "HexBytes::is_empty")]
    pub metadata: HexBytes,
    #[serde(skip_serializing_if = "HexBytes::is_empty")]
    pub asset_definition: HexBytes,
}

/// A shaped output entry. `address` duplicates `script` byte for byte and
/// stays populated for backward client compatibility.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TxOutputView {
    pub asset_id: AssetId,
    pub amount: u64,
    /// Deprecated: identical to `script`.
    pub address: HexBytes,
    pub script: HexBytes,
    #[serde(skip_serializing_if = "HexBytes::is_empty")]
    pub metadata: HexBytes,
}

/// Unified asset view merged from the circulation and definition aspects.
/// Either aspect may be absent; consumers treat the definition fields and
/// the issued total as independently optional.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssetView {
    pub id: AssetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_pointer: Option<DefinitionHash>,
    #[serde(skip_serializing_if = "HexBytes::is_empty")]
    pub definition: HexBytes,
    pub issued: u64,
}

/// Convert a ledger timestamp to wall-clock text form.
pub(crate) fn wall_clock(ts: Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(ts.as_secs() as i64, 0).unwrap_or_default()
}
