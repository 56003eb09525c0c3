//! Error types for Bittropolis network parameters

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Both the test network and the regression-test network were requested.
    ConflictingNetworks,
    UnknownNetwork(String),
    /// A computed genesis value differs from the hard-coded one.
    GenesisMismatch {
        network: String,
        field: &'static str,
        expected: String,
        computed: String,
    },
    InvalidHex(String),
    InvalidCompact(u32),
    InvalidSeed(String),
    CryptoError(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::ConflictingNetworks => {
                write!(f, "Invalid combination of -regtest and -testnet")
            }
            ChainError::UnknownNetwork(name) => write!(f, "Unknown network: {}", name),
            ChainError::GenesisMismatch {
                network,
                field,
                expected,
                computed,
            } => write!(
                f,
                "Genesis {} mismatch on {}: expected {}, computed {}",
                field, network, expected, computed
            ),
            ChainError::InvalidHex(msg) => write!(f, "Invalid hex: {}", msg),
            ChainError::InvalidCompact(bits) => {
                write!(f, "Invalid compact target encoding: {:#010x}", bits)
            }
            ChainError::InvalidSeed(msg) => write!(f, "Invalid seed: {}", msg),
            ChainError::CryptoError(msg) => write!(f, "Cryptographic error: {}", msg),
            ChainError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ChainError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

impl From<hex::FromHexError> for ChainError {
    fn from(err: hex::FromHexError) -> Self {
        ChainError::InvalidHex(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
