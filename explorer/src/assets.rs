//! Asset aggregation — merging the circulation and definition aspects.
//!
//! The two aspects live in different stores (issuer node vs. ledger) and
//! either may be absent for a given asset: defined but never issued, or
//! issued before any definition landed in a block. The merge is a sparse
//! outer-join keyed by the asset's text form, and deliberately preserves
//! those lopsided entries rather than treating them as errors.

use std::collections::HashMap;

use tracing::debug;

use chainview_store::{LedgerStore, NodeStore};
use chainview_types::{AssetId, DefinitionHash};

use crate::views::AssetView;
use crate::{Explorer, ExplorerError};

impl<L: LedgerStore, N: NodeStore> Explorer<L, N> {
    /// Merged views for the requested assets, keyed by their text form.
    ///
    /// Ids present in neither source are omitted from the result; callers
    /// must treat a missing key as "unknown asset", not as a zero-valued
    /// one.
    pub fn get_assets(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, AssetView>, ExplorerError> {
        let mut res: HashMap<String, AssetView> = HashMap::new();

        let with_circulation = self
            .node
            .asset_circulation(asset_ids)
            .map_err(|e| ExplorerError::store("fetching issuer asset records", e))?;
        for (id, record) in with_circulation {
            res.insert(
                id,
                AssetView {
                    id: record.id,
                    definition_pointer: None,
                    definition: Default::default(),
                    issued: record.confirmed_issued,
                },
            );
        }

        let definitions = self
            .ledger
            .asset_definitions(asset_ids)
            .map_err(|e| ExplorerError::store("fetching asset definitions", e))?;
        for (id, definition) in definitions {
            let pointer = DefinitionHash::of(&definition);
            match res.get_mut(&id) {
                Some(view) => {
                    view.definition_pointer = Some(pointer);
                    view.definition = definition.into();
                }
                None => {
                    // Issued total unknown to the node store; the asset may
                    // not have been issued yet. The key is the store's own,
                    // so a parse failure means corrupted state.
                    let parsed: AssetId = id
                        .parse()
                        .map_err(|source| ExplorerError::InvalidAssetKey {
                            key: id.clone(),
                            source,
                        })?;
                    res.insert(
                        id,
                        AssetView {
                            id: parsed,
                            definition_pointer: Some(pointer),
                            definition: definition.into(),
                            issued: 0,
                        },
                    );
                }
            }
        }

        debug!(requested = asset_ids.len(), resolved = res.len(), "aggregated assets");
        Ok(res)
    }

    /// Single-asset convenience form; fails with `NotFound` when the asset
    /// is present in neither source.
    pub fn get_asset(&self, asset_id: &str) -> Result<AssetView, ExplorerError> {
        let ids = [asset_id.to_string()];
        let mut assets = self.get_assets(&ids)?;
        assets
            .remove(asset_id)
            .ok_or_else(|| ExplorerError::NotFound(format!("asset {asset_id}")))
    }
}
