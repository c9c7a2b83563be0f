//! Issuer-node metadata storage trait.

use std::collections::HashMap;

use crate::StoreError;
use chainview_types::AssetId;
use serde::{Deserialize, Serialize};

/// Confirmed circulation record for one asset, tracked by the issuer node
/// independently of the asset's on-chain definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCirculation {
    pub id: AssetId,
    /// Total units confirmed issued for this asset.
    pub confirmed_issued: u64,
}

/// Trait for the account/node metadata store.
pub trait NodeStore {
    /// Circulation records keyed by the asset's canonical text form.
    /// Absent keys are simply omitted from the result; an asset that was
    /// never issued is valid domain state, not an error.
    fn asset_circulation(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, AssetCirculation>, StoreError>;
}
