/// Transaction types for Bittropolis
use crate::crypto::{sha256d, Hash256, ZERO_HASH};
use crate::encode::Encodable;
use crate::script::Script;

/// Reference to an output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint spent by a coinbase input.
    pub fn null() -> Self {
        OutPoint {
            txid: ZERO_HASH,
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid == ZERO_HASH && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        self.vout.consensus_encode(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxIn {
    /// A coinbase input carrying `script_sig`.
    pub fn coinbase(script_sig: Script) -> Self {
        TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.previous_output.consensus_encode(out);
        self.script_sig.consensus_encode(out);
        self.sequence.consensus_encode(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Value in the smallest currency unit.
    pub value: i64,
    pub script_pubkey: Script,
}

impl TxOut {
    /// A zero-value output with an empty, unspendable script.
    pub fn empty() -> Self {
        TxOut {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.value.consensus_encode(out);
        self.script_pubkey.consensus_encode(out);
    }
}

/// A transaction. Unlike Bitcoin, every transaction carries its own timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Calculate the transaction id (double SHA-256 of the serialization)
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.serialize())
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.time.consensus_encode(out);
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        self.lock_time.consensus_encode(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Builder;

    fn sample_coinbase() -> Transaction {
        Transaction {
            version: 1,
            time: 1_505_146_800,
            inputs: vec![TxIn::coinbase(
                Builder::new().push_int(0).push_slice(b"marker").into_script(),
            )],
            outputs: vec![TxOut::empty()],
            lock_time: 0,
        }
    }

    #[test]
    fn test_null_outpoint() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(
            hex::encode(null.serialize()),
            format!("{}ffffffff", "00".repeat(32))
        );
        assert!(!OutPoint { txid: ZERO_HASH, vout: 0 }.is_null());
    }

    #[test]
    fn test_empty_output_encoding() {
        let out = TxOut::empty();
        assert!(out.is_empty());
        // eight zero value bytes followed by an empty script
        assert_eq!(hex::encode(out.serialize()), "000000000000000000");
    }

    #[test]
    fn test_transaction_layout() {
        let tx = sample_coinbase();
        assert!(tx.is_coinbase());
        let bytes = tx.serialize();
        assert_eq!(&bytes[0..4], &1i32.to_le_bytes());
        assert_eq!(&bytes[4..8], &1_505_146_800u32.to_le_bytes());
        assert_eq!(bytes[8], 1); // input count
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_hash_depends_on_time() {
        let tx = sample_coinbase();
        let mut later = tx.clone();
        later.time += 1;
        assert_eq!(tx.hash(), sample_coinbase().hash());
        assert_ne!(tx.hash(), later.hash());
    }
}
