//! Per-network chain parameters
//!
//! The main network is written out in full. The test network is a copy of
//! it with an explicit list of overrides, and the regression-test network is
//! a copy of the test network with a further list. Each record builds and
//! verifies its own genesis block.

use crate::blockchain::Block;
use crate::crypto::{bytes_from_hex, hash_to_hex, parse_public_key, Hash256};
use crate::error::ChainError;
use crate::genesis::{build_verified_genesis, GenesisSpec};
use crate::network::Network;
use crate::pow::{limit_from_shift, target_to_compact};
use crate::seeds::{convert_seeds, NetAddress, MAIN_SEEDS, TEST_SEEDS};
use once_cell::sync::Lazy;
use primitive_types::U256;
use secp256k1::PublicKey;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Genesis inputs of the main network. The other networks override a subset.
pub const MAIN_GENESIS: GenesisSpec = GenesisSpec {
    coinbase_text: "YoucansmokemarijuanayoucaneatityoucanwearititsaperfectplantTommyChongh41l$m34g0l4202017",
    tx_time: 1_505_146_800,
    block_time: 1_505_146_800,
    version: 1,
    bits: 0x1e0f_ffff,
    nonce: 1_371_509,
    expected_hash: "0x00000315daec388b84b69bf536b0ba31bdc86a38f1dd17491af6fec1cde695f6",
    expected_merkle_root: "0x953ca67c6c183c50175c3c9f1734ccf635b0a0e66e6aa50d157b1cf0c11cd26b",
};

const MAIN_ALERT_PUBKEY: &str = "04400b96e2259341b6963feba3e7373ad62bcffff5b446f542155372c95248a9cf3732c2050102bbf0c7760e1bbff6517d663b252d994e7c1c06faf020d83f5cc8";
const TEST_ALERT_PUBKEY: &str = "0429f6baea4f15db6a152b071d2d7bc5510e673dede708bb7b8b426de78c600f2e3de04f987cc6df7b7a9de7c68ad1b6a1551dc22358d23fb617afcbdb4bb00ec8";

const MAIN_DNS_SEEDS: [&str; 5] = [
    "seed1.bittropolis.com",
    "seed2.bittropolis.com",
    "seed3.bittropolis.com",
    "seed4.bittropolis.com",
    "seed5.bittropolis.com",
];

/// Kinds of base58-encoded data that carry a network-specific prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

/// Version-byte prefixes for each [`Base58Type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// A DNS seed: display label and hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    fn same(host: &str) -> Self {
        DnsSeed {
            name: host.to_string(),
            host: host.to_string(),
        }
    }
}

/// Everything that distinguishes one network from another.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainParams {
    network: Network,
    message_start: [u8; 4],
    alert_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: U256,
    genesis_spec: GenesisSpec,
    genesis: Block,
    genesis_hash: Hash256,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<NetAddress>,
    base58_prefixes: Base58Prefixes,
    last_pow_block: u32,
    data_dir: &'static str,
    require_rpc_password: bool,
}

impl ChainParams {
    /// Build and verify the parameters of `network` without touching the shared statics.
    pub fn build(network: Network) -> Result<Self, ChainError> {
        let main = main_params()?;
        match network {
            Network::Main => Ok(main),
            Network::Testnet => testnet_params(&main),
            Network::Regtest => regtest_params(&testnet_params(&main)?),
        }
    }

    pub fn network_id(&self) -> Network {
        self.network
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Raw bytes of the key that signs network alerts.
    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn alert_key(&self) -> Result<PublicKey, ChainError> {
        parse_public_key(&self.alert_pubkey)
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest target any block hash may satisfy.
    pub fn pow_limit(&self) -> U256 {
        self.pow_limit
    }

    pub fn genesis_spec(&self) -> &GenesisSpec {
        &self.genesis_spec
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[NetAddress] {
        &self.fixed_seeds
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Height of the last block rewarded for proof of work.
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Name of the per-network data subdirectory ("" for the main network).
    pub fn data_dir(&self) -> &str {
        self.data_dir
    }

    /// Resolve this network's data directory under `root`.
    pub fn data_dir_path(&self, root: &Path) -> PathBuf {
        if self.data_dir.is_empty() {
            root.to_path_buf()
        } else {
            root.join(self.data_dir)
        }
    }
}

fn main_params() -> Result<ChainParams, ChainError> {
    let network = Network::Main;
    let pow_limit = limit_from_shift(20);
    let genesis_spec = GenesisSpec {
        bits: target_to_compact(pow_limit),
        ..MAIN_GENESIS
    };
    let genesis = build_verified_genesis(network, &genesis_spec)?;

    Ok(ChainParams {
        network,
        // Rarely used upper ASCII, not valid UTF-8, a large 4-byte int at any alignment.
        message_start: [0xf2, 0xf9, 0xe5, 0xeb],
        alert_pubkey: bytes_from_hex(MAIN_ALERT_PUBKEY)?,
        default_port: 55444,
        rpc_port: 55420,
        pow_limit,
        genesis_spec,
        genesis: genesis.block,
        genesis_hash: genesis.hash,
        dns_seeds: MAIN_DNS_SEEDS.iter().map(|host| DnsSeed::same(host)).collect(),
        fixed_seeds: convert_seeds(MAIN_SEEDS),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![38],
            script_address: vec![98],
            secret_key: vec![240],
            ext_public_key: vec![0xee, 0x80, 0x28, 0x6a],
            ext_secret_key: vec![0xee, 0x80, 0x31, 0xe8],
        },
        last_pow_block: 100,
        data_dir: Network::Main.data_dir_name(),
        require_rpc_password: true,
    })
}

fn testnet_params(main: &ChainParams) -> Result<ChainParams, ChainError> {
    let network = Network::Testnet;
    let pow_limit = limit_from_shift(16);
    let genesis_spec = GenesisSpec {
        bits: target_to_compact(pow_limit),
        nonce: 57_829,
        expected_hash: "0x000068ad37bbbb2d31e349925a78249f703b7c626d0ec7f1f99498f9960ecbc7",
        ..main.genesis_spec
    };
    let genesis = build_verified_genesis(network, &genesis_spec)?;

    Ok(ChainParams {
        network,
        message_start: [0xe5, 0xfa, 0xcf, 0xfc],
        alert_pubkey: bytes_from_hex(TEST_ALERT_PUBKEY)?,
        default_port: 42001,
        rpc_port: 42000,
        pow_limit,
        genesis_spec,
        genesis: genesis.block,
        genesis_hash: genesis.hash,
        dns_seeds: Vec::new(),
        fixed_seeds: convert_seeds(TEST_SEEDS),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![127],
            script_address: vec![196],
            secret_key: vec![255],
            ext_public_key: vec![0x76, 0xc0, 0xfd, 0xfb],
            ext_secret_key: vec![0x76, 0xc1, 0x07, 0x7a],
        },
        last_pow_block: 0x7fff_ffff,
        data_dir: Network::Testnet.data_dir_name(),
        ..main.clone()
    })
}

fn regtest_params(testnet: &ChainParams) -> Result<ChainParams, ChainError> {
    let network = Network::Regtest;
    let pow_limit = limit_from_shift(1);
    // Only the block header moves to the later timestamp; the coinbase keeps its own.
    let genesis_spec = GenesisSpec {
        block_time: 1_411_111_111,
        bits: target_to_compact(pow_limit),
        nonce: 6,
        expected_hash: "0x2f124be2af1b61cf843491478e6971f9c538099e4f8d5312e7f7964c9ee5b28e",
        ..testnet.genesis_spec
    };
    let genesis = build_verified_genesis(network, &genesis_spec)?;

    Ok(ChainParams {
        network,
        message_start: [0xf7, 0xb9, 0x8b, 0xd8],
        default_port: 18444,
        pow_limit,
        genesis_spec,
        genesis: genesis.block,
        genesis_hash: genesis.hash,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        data_dir: Network::Regtest.data_dir_name(),
        require_rpc_password: false,
        ..testnet.clone()
    })
}

/// Unwrap a parameter build at static initialization. A failure here is a
/// corrupted constant table and the process must not continue.
fn verified_or_abort(network: Network, result: Result<ChainParams, ChainError>) -> ChainParams {
    match result {
        Ok(params) => {
            info!(
                "Loaded {} parameters (genesis {})",
                network,
                hash_to_hex(&params.genesis_hash)
            );
            params
        }
        Err(e) => {
            error!("Chain parameters for {} failed verification: {}", network, e);
            panic!("chain parameters for {} failed verification: {}", network, e);
        }
    }
}

static MAIN_PARAMS: Lazy<ChainParams> =
    Lazy::new(|| verified_or_abort(Network::Main, main_params()));

static TESTNET_PARAMS: Lazy<ChainParams> =
    Lazy::new(|| verified_or_abort(Network::Testnet, testnet_params(&MAIN_PARAMS)));

static REGTEST_PARAMS: Lazy<ChainParams> =
    Lazy::new(|| verified_or_abort(Network::Regtest, regtest_params(&TESTNET_PARAMS)));

/// The shared, process-lifetime parameters of `network`.
pub fn params_for(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => &*MAIN_PARAMS,
        Network::Testnet => &*TESTNET_PARAMS,
        Network::Regtest => &*REGTEST_PARAMS,
    }
}

/// Build and verify all three networks. Call once at startup, before any
/// other subsystem, so a bad constant aborts the process immediately.
pub fn init_all() {
    for network in Network::ALL {
        params_for(network);
    }
}
