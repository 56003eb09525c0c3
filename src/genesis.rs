//! Genesis block construction and verification
//!
//! Every network's first block is rebuilt from a handful of literals and
//! checked against its hard-coded hash and merkle root. A mismatch means the
//! constant tables are wrong and the node must not start.

use crate::blockchain::{calculate_merkle_root, Block, BlockHeader};
use crate::crypto::{hash_from_hex, hash_to_hex, Hash256, ZERO_HASH};
use crate::error::ChainError;
use crate::network::Network;
use crate::pow::{compact_to_target, hash_meets_target};
use crate::script::Builder;
use crate::transaction::{Transaction, TxIn, TxOut};
use tracing::{debug, info};

/// Number pushed after `OP_0` in the genesis coinbase script.
const COINBASE_SCRIPT_NUMBER: i64 = 42;

/// Fixed inputs of a genesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Marker text embedded in the coinbase signature script.
    pub coinbase_text: &'static str,
    /// Timestamp of the coinbase transaction.
    pub tx_time: u32,
    /// Timestamp of the block header.
    pub block_time: u32,
    pub version: i32,
    pub bits: u32,
    pub nonce: u32,
    /// Expected block hash, big-endian hex.
    pub expected_hash: &'static str,
    /// Expected merkle root, big-endian hex.
    pub expected_merkle_root: &'static str,
}

/// A verified genesis block together with its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    pub block: Block,
    pub hash: Hash256,
}

/// The genesis coinbase: one marker input and one empty output.
pub fn genesis_coinbase(coinbase_text: &str, tx_time: u32) -> Transaction {
    let script_sig = Builder::new()
        .push_int(0)
        .push_int_non_minimal(COINBASE_SCRIPT_NUMBER)
        .push_slice(coinbase_text.as_bytes())
        .into_script();

    Transaction {
        version: 1,
        time: tx_time,
        inputs: vec![TxIn::coinbase(script_sig)],
        outputs: vec![TxOut::empty()],
        lock_time: 0,
    }
}

/// Assemble the genesis block without checking it.
pub fn build_genesis_block(spec: &GenesisSpec) -> Block {
    let transactions = vec![genesis_coinbase(spec.coinbase_text, spec.tx_time)];
    let merkle_root = calculate_merkle_root(&transactions);

    Block {
        header: BlockHeader {
            version: spec.version,
            previous_hash: ZERO_HASH,
            merkle_root,
            time: spec.block_time,
            bits: spec.bits,
            nonce: spec.nonce,
        },
        transactions,
    }
}

/// Build the genesis block for `network` and check it against the expected literals.
pub fn build_verified_genesis(
    network: Network,
    spec: &GenesisSpec,
) -> Result<Genesis, ChainError> {
    let block = build_genesis_block(spec);
    let hash = block.hash()?;

    let expected_merkle_root = hash_from_hex(spec.expected_merkle_root)?;
    if block.header.merkle_root != expected_merkle_root {
        return Err(mismatch(
            network,
            "merkle root",
            &expected_merkle_root,
            &block.header.merkle_root,
        ));
    }

    let expected_hash = hash_from_hex(spec.expected_hash)?;
    if hash != expected_hash {
        return Err(mismatch(network, "hash", &expected_hash, &hash));
    }

    let target = compact_to_target(spec.bits)?;
    if !hash_meets_target(&hash, target) {
        return Err(ChainError::GenesisMismatch {
            network: network.to_string(),
            field: "proof of work",
            expected: format!("hash below bits {:#010x}", spec.bits),
            computed: hash_to_hex(&hash),
        });
    }

    debug!(
        "Genesis merkle root for {}: {}",
        network,
        hash_to_hex(&block.header.merkle_root)
    );
    info!("Verified {} genesis block {}", network, hash_to_hex(&hash));

    Ok(Genesis { block, hash })
}

fn mismatch(
    network: Network,
    field: &'static str,
    expected: &Hash256,
    computed: &Hash256,
) -> ChainError {
    ChainError::GenesisMismatch {
        network: network.to_string(),
        field,
        expected: hash_to_hex(expected),
        computed: hash_to_hex(computed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::Encodable;
    use crate::params::MAIN_GENESIS;

    #[test]
    fn test_coinbase_script_layout() {
        let tx = genesis_coinbase(MAIN_GENESIS.coinbase_text, MAIN_GENESIS.tx_time);
        let script = tx.inputs[0].script_sig.as_bytes();
        // OP_0, push(42), OP_PUSHDATA1 87 <marker>
        assert_eq!(&script[..5], &[0x00, 0x01, 0x2a, 0x4c, 87]);
        assert_eq!(&script[5..], MAIN_GENESIS.coinbase_text.as_bytes());
        assert!(tx.is_coinbase());
        assert!(tx.outputs[0].is_empty());
    }

    #[test]
    fn test_single_transaction_merkle_root_is_txid() {
        let block = build_genesis_block(&MAIN_GENESIS);
        assert_eq!(block.transactions.len(), 1);
        assert_eq!(block.header.merkle_root, block.transactions[0].hash());
        assert_eq!(block.header.previous_hash, ZERO_HASH);
        assert_eq!(block.header.serialize().len(), 80);
    }

    #[test]
    fn test_main_genesis_verifies() {
        let genesis = build_verified_genesis(Network::Main, &MAIN_GENESIS).unwrap();
        assert_eq!(
            hash_to_hex(&genesis.hash),
            "00000315daec388b84b69bf536b0ba31bdc86a38f1dd17491af6fec1cde695f6"
        );
        assert_eq!(
            hash_to_hex(&genesis.block.header.merkle_root),
            "953ca67c6c183c50175c3c9f1734ccf635b0a0e66e6aa50d157b1cf0c11cd26b"
        );
    }

    #[test]
    fn test_wrong_nonce_is_rejected() {
        let spec = GenesisSpec {
            nonce: MAIN_GENESIS.nonce + 1,
            ..MAIN_GENESIS
        };
        let err = build_verified_genesis(Network::Main, &spec).unwrap_err();
        match err {
            ChainError::GenesisMismatch { field, network, .. } => {
                assert_eq!(field, "hash");
                assert_eq!(network, "main");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_wrong_marker_is_rejected_on_merkle_root() {
        let spec = GenesisSpec {
            coinbase_text: "tampered",
            ..MAIN_GENESIS
        };
        let err = build_verified_genesis(Network::Main, &spec).unwrap_err();
        assert!(err.to_string().contains("Genesis merkle root mismatch"));
    }

    #[test]
    fn test_malformed_expected_literal() {
        let spec = GenesisSpec {
            expected_hash: "0x1234",
            ..MAIN_GENESIS
        };
        assert!(matches!(
            build_verified_genesis(Network::Main, &spec),
            Err(ChainError::InvalidHex(_))
        ));
    }
}
