//! Script construction
//!
//! Only the builder side is needed here: the genesis coinbase signature
//! script and empty output scripts. No interpreter lives in this crate.

use crate::encode::{write_var_bytes, Encodable};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xac;

/// A raw script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl Encodable for Script {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_var_bytes(out, &self.0);
    }
}

/// Incremental script builder.
#[derive(Debug, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    pub fn new() -> Self {
        Builder(Vec::new())
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Push an integer using the shortest form: `OP_0`, `OP_1NEGATE`,
    /// `OP_1`..`OP_16`, or a number push.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8) - 1),
            _ => self.push_int_non_minimal(n),
        }
    }

    /// Push an integer as a number encoding even when a small-int opcode exists.
    pub fn push_int_non_minimal(self, n: i64) -> Self {
        let encoded = encode_script_num(n);
        self.push_slice(&encoded)
    }

    /// Push data with the smallest push opcode that fits its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn into_script(self) -> Script {
        Script(self.0)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // The top bit carries the sign, so add a byte when the magnitude already uses it.
    if let Some(last) = out.last_mut() {
        if *last & 0x80 != 0 {
            out.push(if negative { 0x80 } else { 0x00 });
        } else if negative {
            *last |= 0x80;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_int_small_values_use_opcodes() {
        let script = Builder::new()
            .push_int(0)
            .push_int(1)
            .push_int(16)
            .push_int(-1)
            .into_script();
        assert_eq!(script.as_bytes(), &[OP_0, OP_1, OP_16, OP_1NEGATE]);
    }

    #[test]
    fn test_push_int_non_minimal_42() {
        let script = Builder::new().push_int_non_minimal(42).into_script();
        assert_eq!(script.as_bytes(), &[0x01, 0x2a]);
    }

    #[test]
    fn test_script_num_sign_handling() {
        assert_eq!(encode_script_num(127), vec![0x7f]);
        assert_eq!(encode_script_num(128), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-1), vec![0x81]);
        assert_eq!(encode_script_num(-128), vec![0x80, 0x80]);
        assert_eq!(encode_script_num(256), vec![0x00, 0x01]);
    }

    #[test]
    fn test_push_slice_selects_pushdata_opcode() {
        let short = Builder::new().push_slice(&[0xaa; 75]).into_script();
        assert_eq!(short.as_bytes()[0], 75);
        assert_eq!(short.len(), 76);

        let medium = Builder::new().push_slice(&[0xaa; 87]).into_script();
        assert_eq!(&medium.as_bytes()[..2], &[OP_PUSHDATA1, 87]);

        let long = Builder::new().push_slice(&[0xaa; 300]).into_script();
        assert_eq!(&long.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }

    #[test]
    fn test_script_encoding_is_length_prefixed() {
        assert_eq!(Script::new().serialize(), vec![0x00]);
        let script = Builder::new().push_opcode(OP_CHECKSIG).into_script();
        assert_eq!(script.serialize(), vec![0x01, OP_CHECKSIG]);
    }
}
