//! Bittropolis - network parameters and genesis blocks
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Networks
//! - [`network`] - Network identifiers
//! - [`params`] - Per-network chain parameters
//! - [`registry`] - Active network selection
//!
//! ## Genesis
//! - [`genesis`] - Genesis block construction and verification
//! - [`blockchain`] - Block headers and merkle roots
//! - [`transaction`] - Transaction types
//! - [`script`] - Script builder
//! - [`encode`] - Consensus serialization
//! - [`pow`] - Proof-of-work targets and compact bits
//!
//! ## Peers
//! - [`seeds`] - Fixed seed conversion
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`crypto`] - Hashing and key parsing
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Networks
// ============================================================================
pub mod network;
pub mod params;
pub mod registry;

// ============================================================================
// Genesis
// ============================================================================
pub mod blockchain;
pub mod encode;
pub mod genesis;
pub mod pow;
pub mod script;
pub mod transaction;

// ============================================================================
// Peers
// ============================================================================
pub mod seeds;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod crypto;
pub mod error;

pub use error::{ChainError, Result};
pub use network::Network;
pub use params::ChainParams;
pub use registry::NetworkRegistry;
