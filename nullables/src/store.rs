//! Nullable stores — thread-safe in-memory ledger and node storage for
//! testing.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use chainview_store::{AssetCirculation, LedgerStore, NodeStore, StoreError};
use chainview_types::{AssetId, Block, BlockHash, BlockHeader, Transaction, TxHash};

/// A transaction known to the ledger, with the header of its containing
/// block (`None` while pending).
struct TxRecord {
    tx: Transaction,
    block: Option<BlockHeader>,
}

/// An in-memory ledger store for testing.
///
/// Blocks are indexed by height for ordered descending scans and by hash
/// for point lookups; transactions are indexed by hash together with their
/// containing header.
pub struct NullLedgerStore {
    blocks_by_height: Mutex<BTreeMap<u64, Block>>,
    heights_by_hash: Mutex<HashMap<[u8; 32], u64>>,
    transactions: Mutex<HashMap<[u8; 32], TxRecord>>,
    definitions: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullLedgerStore {
    pub fn new() -> Self {
        Self {
            blocks_by_height: Mutex::new(BTreeMap::new()),
            heights_by_hash: Mutex::new(HashMap::new()),
            transactions: Mutex::new(HashMap::new()),
            definitions: Mutex::new(HashMap::new()),
        }
    }

    /// Seed a block, indexing its hash and every contained transaction.
    pub fn add_block(&self, block: Block) {
        self.heights_by_hash
            .lock()
            .unwrap()
            .insert(*block.hash().as_bytes(), block.height());
        {
            let mut txs = self.transactions.lock().unwrap();
            for tx in &block.transactions {
                txs.insert(
                    *tx.hash().as_bytes(),
                    TxRecord {
                        tx: tx.clone(),
                        block: Some(block.header.clone()),
                    },
                );
            }
        }
        self.blocks_by_height
            .lock()
            .unwrap()
            .insert(block.height(), block);
    }

    /// Seed a transaction that is known but not yet included in any block.
    pub fn add_pending_transaction(&self, tx: Transaction) {
        self.transactions
            .lock()
            .unwrap()
            .insert(*tx.hash().as_bytes(), TxRecord { tx, block: None });
    }

    /// Seed the latest definition blob for an asset.
    pub fn put_asset_definition(&self, id: &AssetId, definition: &[u8]) {
        self.put_raw_asset_definition(&id.to_string(), definition);
    }

    /// Seed a definition under an arbitrary store key. Lets tests exercise
    /// keys that do not parse as asset identifiers.
    pub fn put_raw_asset_definition(&self, key: &str, definition: &[u8]) {
        self.definitions
            .lock()
            .unwrap()
            .insert(key.to_string(), definition.to_vec());
    }
}

impl Default for NullLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for NullLedgerStore {
    fn list_blocks(
        &self,
        before_height: Option<u64>,
        limit: i64,
    ) -> Result<Vec<Block>, StoreError> {
        let blocks = self.blocks_by_height.lock().unwrap();
        let mut out = Vec::new();
        for (&height, block) in blocks.iter().rev() {
            if let Some(bound) = before_height {
                if height >= bound {
                    continue;
                }
            }
            out.push(block.clone());
            if limit > 0 && out.len() as i64 == limit {
                break;
            }
        }
        Ok(out)
    }

    fn get_block(&self, hash: &BlockHash) -> Result<Block, StoreError> {
        let height = self
            .heights_by_hash
            .lock()
            .unwrap()
            .get(hash.as_bytes())
            .copied()
            .ok_or_else(|| StoreError::NotFound(hash.to_string()))?;
        self.blocks_by_height
            .lock()
            .unwrap()
            .get(&height)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(hash.to_string()))
    }

    fn get_transactions(
        &self,
        hashes: &[TxHash],
    ) -> Result<HashMap<TxHash, Transaction>, StoreError> {
        let txs = self.transactions.lock().unwrap();
        let mut out = HashMap::new();
        let mut missing = Vec::new();
        for hash in hashes {
            match txs.get(hash.as_bytes()) {
                Some(record) => {
                    out.insert(*hash, record.tx.clone());
                }
                None => missing.push(hash.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(StoreError::MissingKeys(missing));
        }
        Ok(out)
    }

    fn block_containing(&self, tx: &TxHash) -> Result<Option<BlockHeader>, StoreError> {
        let txs = self.transactions.lock().unwrap();
        Ok(txs.get(tx.as_bytes()).and_then(|record| record.block.clone()))
    }

    fn asset_definitions(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, Vec<u8>>, StoreError> {
        let defs = self.definitions.lock().unwrap();
        let mut out = HashMap::new();
        for id in asset_ids {
            if let Some(def) = defs.get(id) {
                out.insert(id.clone(), def.clone());
            }
        }
        Ok(out)
    }
}

/// An in-memory node metadata store for testing.
pub struct NullNodeStore {
    circulation: Mutex<HashMap<String, AssetCirculation>>,
}

impl NullNodeStore {
    pub fn new() -> Self {
        Self {
            circulation: Mutex::new(HashMap::new()),
        }
    }

    /// Seed the confirmed issued total for an asset.
    pub fn set_issued(&self, id: &AssetId, confirmed_issued: u64) {
        self.circulation.lock().unwrap().insert(
            id.to_string(),
            AssetCirculation {
                id: *id,
                confirmed_issued,
            },
        );
    }
}

impl Default for NullNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore for NullNodeStore {
    fn asset_circulation(
        &self,
        asset_ids: &[String],
    ) -> Result<HashMap<String, AssetCirculation>, StoreError> {
        let circ = self.circulation.lock().unwrap();
        let mut out = HashMap::new();
        for id in asset_ids {
            if let Some(record) = circ.get(id) {
                out.insert(id.clone(), record.clone());
            }
        }
        Ok(out)
    }
}
