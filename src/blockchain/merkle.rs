//! Merkle root over an ordered transaction list
//!
//! Pairwise double SHA-256, duplicating the last node of an odd level.

use crate::crypto::{sha256d, Hash256, ZERO_HASH};
use crate::transaction::Transaction;

/// Hash two child nodes into their parent.
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut combined = [0u8; 64];
    combined[..32].copy_from_slice(left);
    combined[32..].copy_from_slice(right);
    sha256d(&combined)
}

/// Merkle root of a list of leaf hashes.
///
/// A single leaf is its own root; an empty list has the zero hash as root.
pub fn merkle_root_from_hashes(leaves: &[Hash256]) -> Hash256 {
    match leaves {
        [] => ZERO_HASH,
        [only] => *only,
        _ => {
            let mut level = leaves.to_vec();
            while level.len() > 1 {
                level = level
                    .chunks(2)
                    .map(|pair| match pair {
                        [left, right] => hash_pair(left, right),
                        [last] => hash_pair(last, last),
                        _ => unreachable!("chunks(2) yields one or two items"),
                    })
                    .collect();
            }
            level[0]
        }
    }
}

pub fn calculate_merkle_root(transactions: &[Transaction]) -> Hash256 {
    let leaves: Vec<Hash256> = transactions.iter().map(Transaction::hash).collect();
    merkle_root_from_hashes(&leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(n: u8) -> Hash256 {
        [n; 32]
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(merkle_root_from_hashes(&[]), ZERO_HASH);
        assert_eq!(merkle_root_from_hashes(&[leaf(9)]), leaf(9));
    }

    #[test]
    fn test_two_leaves() {
        let root = merkle_root_from_hashes(&[leaf(1), leaf(2)]);
        assert_eq!(root, hash_pair(&leaf(1), &leaf(2)));
        assert_ne!(root, merkle_root_from_hashes(&[leaf(2), leaf(1)]));
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let three = merkle_root_from_hashes(&[leaf(1), leaf(2), leaf(3)]);
        let four = merkle_root_from_hashes(&[leaf(1), leaf(2), leaf(3), leaf(3)]);
        assert_eq!(three, four);
        assert_eq!(
            three,
            hash_pair(&hash_pair(&leaf(1), &leaf(2)), &hash_pair(&leaf(3), &leaf(3)))
        );
    }
}
