//! Cryptographic primitives for Bittropolis

use crate::error::ChainError;
use scrypt::Params;
use secp256k1::PublicKey;
use sha2::{Digest, Sha256};

/// A 256-bit hash in internal (little-endian) byte order.
pub type Hash256 = [u8; 32];

/// The all-zero hash, used as the previous-block hash of a genesis block.
pub const ZERO_HASH: Hash256 = [0u8; 32];

/// scrypt cost parameters of the block proof-of-work hash (N = 1024, r = 1, p = 1).
const SCRYPT_LOG_N: u8 = 10;
const SCRYPT_R: u32 = 1;
const SCRYPT_P: u32 = 1;

/// Double SHA-256, used for transaction ids and merkle nodes.
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// scrypt hash of a serialized block header. The header is both password and salt.
pub fn scrypt_hash(data: &[u8]) -> Result<Hash256, ChainError> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, 32)
        .map_err(|e| ChainError::CryptoError(format!("Invalid scrypt parameters: {}", e)))?;
    let mut out = [0u8; 32];
    scrypt::scrypt(data, data, &params, &mut out)
        .map_err(|e| ChainError::CryptoError(format!("scrypt failed: {}", e)))?;
    Ok(out)
}

/// Convert a hash to the conventional big-endian hex form used for display.
pub fn hash_to_hex(hash: &Hash256) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Parse a big-endian hex hash (optionally `0x`-prefixed) into internal byte order.
pub fn hash_from_hex(hex_str: &str) -> Result<Hash256, ChainError> {
    let trimmed = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = hex::decode(trimmed)?;
    let mut hash: Hash256 = bytes.try_into().map_err(|b: Vec<u8>| {
        ChainError::InvalidHex(format!("Hash must be 32 bytes, got {}", b.len()))
    })?;
    hash.reverse();
    Ok(hash)
}

/// Decode raw hex (optionally `0x`-prefixed) into bytes.
pub fn bytes_from_hex(hex_str: &str) -> Result<Vec<u8>, ChainError> {
    let trimmed = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    Ok(hex::decode(trimmed)?)
}

/// Parse raw serialized public key bytes (compressed or uncompressed).
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, ChainError> {
    PublicKey::from_slice(bytes)
        .map_err(|e| ChainError::CryptoError(format!("Invalid public key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_empty() {
        // Well-known double SHA-256 of the empty string
        assert_eq!(
            hex::encode(sha256d(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_hash_hex_is_byte_reversed() {
        let mut hash = ZERO_HASH;
        hash[0] = 0xab;
        hash[31] = 0x01;
        let text = hash_to_hex(&hash);
        assert!(text.starts_with("01"));
        assert!(text.ends_with("ab"));
        assert_eq!(hash_from_hex(&text).unwrap(), hash);
        assert_eq!(hash_from_hex(&format!("0x{}", text)).unwrap(), hash);
    }

    #[test]
    fn test_hash_from_hex_wrong_length() {
        let result = hash_from_hex("abcd");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Hash must be 32 bytes"));
        assert!(hash_from_hex("zz").is_err());
    }

    #[test]
    fn test_scrypt_hash_is_deterministic() {
        let header = [7u8; 80];
        let a = scrypt_hash(&header).unwrap();
        let b = scrypt_hash(&header).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, scrypt_hash(&[8u8; 80]).unwrap());
    }

    #[test]
    fn test_parse_public_key_rejects_garbage() {
        let result = parse_public_key(&[0x04, 0x01, 0x02]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid public key"));
    }
}
