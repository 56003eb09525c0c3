//! Proof-of-work targets and their compact ("bits") encoding

use crate::crypto::Hash256;
use crate::error::ChainError;
use primitive_types::U256;

/// The easiest possible target shifted right by `shift` bits (`!0 >> shift`).
pub fn limit_from_shift(shift: u32) -> U256 {
    U256::MAX >> shift
}

/// Encode a target as compact bits: a one-byte size and a three-byte mantissa.
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mantissa = if size <= 3 {
        target.low_u64() << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3))).low_u64()
    };
    let mut compact = mantissa as u32;
    // The mantissa is signed; move a set sign bit into an extra size byte.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}

/// Decode compact bits into a target. Negative and overflowing encodings are rejected.
pub fn compact_to_target(bits: u32) -> Result<U256, ChainError> {
    let size = (bits >> 24) as usize;
    let word = bits & 0x007f_ffff;
    let negative = word != 0 && bits & 0x0080_0000 != 0;
    let overflow =
        word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return Err(ChainError::InvalidCompact(bits));
    }
    let target = if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3))
    };
    Ok(target)
}

/// Whether a hash (internal byte order) is at or below `target`.
pub fn hash_meets_target(hash: &Hash256, target: U256) -> bool {
    U256::from_little_endian(hash) <= target
}
