use crate::blockchain::merkle::calculate_merkle_root;
use crate::crypto::{scrypt_hash, Hash256};
use crate::encode::Encodable;
use crate::error::ChainError;
use crate::transaction::Transaction;

/// Serialized size of a block header in bytes.
pub const HEADER_SIZE: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub previous_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Block identity and proof-of-work hash: scrypt over the 80-byte header.
    pub fn hash(&self) -> Result<Hash256, ChainError> {
        scrypt_hash(&self.serialize())
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.previous_hash.consensus_encode(out);
        self.merkle_root.consensus_encode(out);
        self.time.consensus_encode(out);
        self.bits.consensus_encode(out);
        self.nonce.consensus_encode(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> Result<Hash256, ChainError> {
        self.header.hash()
    }

    /// Merkle root recomputed from the transaction list.
    pub fn calculate_merkle_root(&self) -> Hash256 {
        calculate_merkle_root(&self.transactions)
    }
}
