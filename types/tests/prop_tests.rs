use proptest::prelude::*;

use chainview_types::{
    AssetId, Block, BlockHash, DefinitionHash, HexBytes, OutPoint, Timestamp, Transaction,
    TxClass, TxHash, TxInput, TxOutput,
};

fn arb_outpoint() -> impl Strategy<Value = OutPoint> {
    (prop::array::uniform32(0u8..), any::<u32>())
        .prop_map(|(tx, index)| OutPoint {
            tx: TxHash::new(tx),
            index,
        })
}

fn arb_input() -> impl Strategy<Value = TxInput> {
    prop_oneof![
        (
            prop::collection::vec(any::<u8>(), 0..16),
            prop::collection::vec(any::<u8>(), 0..16),
        )
            .prop_map(|(metadata, asset_definition)| TxInput::Issuance {
                metadata,
                asset_definition,
            }),
        (arb_outpoint(), prop::collection::vec(any::<u8>(), 0..16))
            .prop_map(|(previous, metadata)| TxInput::Transfer { previous, metadata }),
    ]
}

fn arb_output() -> impl Strategy<Value = TxOutput> {
    (
        prop::array::uniform32(0u8..),
        any::<u64>(),
        prop::collection::vec(any::<u8>(), 0..16),
        prop::collection::vec(any::<u8>(), 0..16),
    )
        .prop_map(|(asset, amount, script, metadata)| TxOutput {
            asset_id: AssetId::new(asset),
            amount,
            script,
            metadata,
        })
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        prop::collection::vec(arb_input(), 0..4),
        prop::collection::vec(arb_output(), 0..4),
        prop::collection::vec(any::<u8>(), 0..16),
    )
        .prop_map(|(inputs, outputs, metadata)| Transaction {
            inputs,
            outputs,
            metadata,
        })
}

proptest! {
    /// Hex text roundtrip: Display -> FromStr is the identity.
    #[test]
    fn tx_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        let parsed: TxHash = hash.to_string().parse().unwrap();
        prop_assert_eq!(parsed, hash);
    }

    #[test]
    fn block_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let parsed: BlockHash = hash.to_string().parse().unwrap();
        prop_assert_eq!(parsed, hash);
    }

    #[test]
    fn asset_id_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = AssetId::new(bytes);
        let parsed: AssetId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// JSON serializes identifiers as 64-char hex text.
    #[test]
    fn tx_hash_json_is_hex_text(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        let json = serde_json::to_value(hash).unwrap();
        prop_assert_eq!(json, serde_json::Value::String(hash.to_string()));
        let back: TxHash = serde_json::from_value(
            serde_json::Value::String(hash.to_string())
        ).unwrap();
        prop_assert_eq!(back, hash);
    }

    /// Compact formats store identifiers as raw bytes.
    #[test]
    fn asset_id_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = AssetId::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: AssetId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// HexBytes roundtrips through both JSON (hex text) and bincode (bytes).
    #[test]
    fn hex_bytes_roundtrips(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let blob = HexBytes::new(data.clone());
        let json = serde_json::to_string(&blob).unwrap();
        let from_json: HexBytes = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(from_json.as_slice(), data.as_slice());

        let bin = bincode::serialize(&blob).unwrap();
        let from_bin: HexBytes = bincode::deserialize(&bin).unwrap();
        prop_assert_eq!(from_bin.as_slice(), data.as_slice());
    }

    /// A transaction is an issuance iff no input references a previous
    /// output.
    #[test]
    fn classification_matches_input_shapes(tx in arb_transaction()) {
        let has_spend = tx.inputs.iter().any(|i| i.previous().is_some());
        let expected = if has_spend { TxClass::Transfer } else { TxClass::Issuance };
        prop_assert_eq!(tx.classify(), expected);
    }

    /// Transaction hashing is deterministic and sensitive to amounts.
    #[test]
    fn transaction_hash_deterministic(tx in arb_transaction()) {
        prop_assert_eq!(tx.hash(), tx.clone().hash());

        if let Some(out) = tx.outputs.first() {
            let mut changed = tx.clone();
            changed.outputs[0].amount = out.amount.wrapping_add(1);
            prop_assert_ne!(changed.hash(), tx.hash());
        }
    }

    /// The block hash is computable from the header alone and commits to
    /// the contained transactions.
    #[test]
    fn block_hash_commits_to_transactions(
        height in 0u64..1_000_000,
        secs in 0u64..4_000_000_000,
        tx in arb_transaction(),
    ) {
        let with_tx = Block::new(
            height,
            BlockHash::ZERO,
            Timestamp::new(secs),
            vec![tx],
        );
        let without = Block::new(height, BlockHash::ZERO, Timestamp::new(secs), vec![]);
        prop_assert_eq!(with_tx.hash(), with_tx.header.hash());
        prop_assert_ne!(with_tx.hash(), without.hash());
    }

    /// A definition pointer depends only on the definition bytes.
    #[test]
    fn definition_pointer_deterministic(def in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(DefinitionHash::of(&def), DefinitionHash::of(&def));
    }
}

#[test]
fn parse_rejects_bad_lengths_and_hex() {
    assert!("".parse::<AssetId>().is_err());
    assert!("abcd".parse::<TxHash>().is_err());
    assert!("zz".repeat(32).parse::<BlockHash>().is_err());
}
