//! Transaction resolution — the central join of the explorer.
//!
//! A transaction view is reconstructed in three steps: fetch, classify
//! (issuance or transfer, decided once), resolve. Transfer inputs are
//! joined against the outputs they spend via a single batch fetch of all
//! referenced previous transactions.

use tracing::{debug, warn};

use chainview_store::{LedgerStore, NodeStore, StoreError};
use chainview_types::{Transaction, TxClass, TxHash, TxInput};

use crate::views::{wall_clock, InputKind, TransactionView, TxInputView, TxOutputView};
use crate::{Explorer, ExplorerError};

impl<L: LedgerStore, N: NodeStore> Explorer<L, N> {
    /// Resolve one transaction into its fully-joined view.
    pub fn get_transaction(&self, tx_id: &TxHash) -> Result<TransactionView, ExplorerError> {
        let mut txs = self
            .ledger
            .get_transactions(std::slice::from_ref(tx_id))
            .map_err(|e| match e {
                StoreError::NotFound(_) | StoreError::MissingKeys(_) => {
                    ExplorerError::NotFound(format!("transaction {tx_id}"))
                }
                other => ExplorerError::store("fetching transaction", other),
            })?;
        let tx = txs
            .remove(tx_id)
            .ok_or_else(|| ExplorerError::NotFound(format!("transaction {tx_id}")))?;

        let block = self
            .ledger
            .block_containing(tx_id)
            .map_err(|e| ExplorerError::store("fetching containing block", e))?;

        let inputs = match tx.classify() {
            TxClass::Issuance => self.resolve_issuance(tx_id, &tx)?,
            TxClass::Transfer => self.resolve_transfer(&tx)?,
        };

        let outputs = tx
            .outputs
            .iter()
            .map(|out| TxOutputView {
                asset_id: out.asset_id,
                amount: out.amount,
                address: out.script.clone().into(),
                script: out.script.clone().into(),
                metadata: out.metadata.clone().into(),
            })
            .collect();

        debug!(%tx_id, confirmed = block.is_some(), "resolved transaction");
        Ok(TransactionView {
            id: *tx_id,
            block_id: block.as_ref().map(|h| h.hash()),
            block_height: block.as_ref().map(|h| h.height),
            block_time: block.as_ref().map(|h| wall_clock(h.timestamp)),
            inputs,
            outputs,
            metadata: tx.metadata.clone().into(),
        })
    }

    /// An issuance view carries exactly one synthesized input entry. The
    /// asset id is inferred from the first output, since issuance inputs do
    /// not carry their own.
    fn resolve_issuance(
        &self,
        tx_id: &TxHash,
        tx: &Transaction,
    ) -> Result<Vec<TxInputView>, ExplorerError> {
        let first_output = tx.outputs.first().ok_or_else(|| {
            warn!(%tx_id, "issuance transaction with zero outputs");
            ExplorerError::InvalidTransaction(format!("issuance {tx_id} has no outputs"))
        })?;

        let (metadata, asset_definition) = match tx.inputs.first() {
            Some(TxInput::Issuance {
                metadata,
                asset_definition,
            }) => (metadata.clone(), asset_definition.clone()),
            // Classification guarantees no transfer input here; a
            // transaction with no inputs at all issues with empty payload.
            _ => (Vec::new(), Vec::new()),
        };

        Ok(vec![TxInputView {
            kind: InputKind::Issuance,
            transaction_id: None,
            transaction_output: None,
            asset_id: first_output.asset_id,
            amount: None,
            metadata: metadata.into(),
            asset_definition: asset_definition.into(),
        }])
    }

    /// Join every transfer input against the output it spends. All
    /// referenced previous transactions are fetched in one batch call; a
    /// miss on any key degrades to the same not-found shape as a
    /// single-key miss.
    fn resolve_transfer(&self, tx: &Transaction) -> Result<Vec<TxInputView>, ExplorerError> {
        let mut spends = Vec::with_capacity(tx.inputs.len());
        for input in &tx.inputs {
            match input {
                TxInput::Transfer { previous, metadata } => spends.push((previous, metadata)),
                TxInput::Issuance { .. } => {
                    return Err(ExplorerError::InvalidTransaction(
                        "transfer input without previous output reference".into(),
                    ))
                }
            }
        }

        let prev_hashes: Vec<TxHash> = spends.iter().map(|(outpoint, _)| outpoint.tx).collect();
        let prev_txs = self.ledger.get_transactions(&prev_hashes).map_err(|e| match e {
            StoreError::MissingKeys(keys) => {
                ExplorerError::NotFound(format!("fetching inputs: transactions {keys:?}"))
            }
            other => ExplorerError::store("fetching inputs", other),
        })?;

        let mut views = Vec::with_capacity(spends.len());
        for (outpoint, metadata) in spends {
            let prev = prev_txs.get(&outpoint.tx).ok_or_else(|| {
                ExplorerError::NotFound(format!("fetching inputs: transaction {}", outpoint.tx))
            })?;
            let spent = prev.outputs.get(outpoint.index as usize).ok_or_else(|| {
                ExplorerError::InvalidTransaction(format!(
                    "input references output {} of {}, which has {} outputs",
                    outpoint.index,
                    outpoint.tx,
                    prev.outputs.len()
                ))
            })?;
            views.push(TxInputView {
                kind: InputKind::Transfer,
                transaction_id: Some(outpoint.tx),
                transaction_output: Some(outpoint.index),
                asset_id: spent.asset_id,
                amount: Some(spent.amount),
                metadata: metadata.clone().into(),
                asset_definition: Default::default(),
            });
        }
        Ok(views)
    }
}
