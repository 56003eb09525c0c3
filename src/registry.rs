//! Active network selection
//!
//! A [`NetworkRegistry`] remembers which of the three networks the node runs
//! on and hands out that network's [`ChainParams`]. Components that need the
//! parameters should be given a registry (or the `&'static ChainParams` it
//! returns). For code that cannot be threaded through, a process-wide
//! registry is available via [`params`] and [`select_params`]; it is meant to
//! be written once during startup and only read afterwards.

use crate::error::ChainError;
use crate::network::Network;
use crate::params::{params_for, ChainParams};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{info, warn};

/// Resolve the two command-line intents into one network.
///
/// Both set is a usage error; neither set means the main network.
pub fn network_from_flags(testnet: bool, regtest: bool) -> Result<Network, ChainError> {
    match (testnet, regtest) {
        (true, true) => Err(ChainError::ConflictingNetworks),
        (_, true) => Ok(Network::Regtest),
        (true, false) => Ok(Network::Testnet),
        (false, false) => Ok(Network::Main),
    }
}

#[derive(Debug, Default)]
pub struct NetworkRegistry {
    active: RwLock<Network>,
}

impl NetworkRegistry {
    /// A registry on the main network.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network(network: Network) -> Self {
        NetworkRegistry {
            active: RwLock::new(network),
        }
    }

    /// Make `network` the active one and return its parameters.
    pub fn select(&self, network: Network) -> &'static ChainParams {
        let params = params_for(network);
        *self.active.write() = network;
        info!("Selected {} network", network);
        params
    }

    /// Select from the `-testnet` / `-regtest` flags.
    ///
    /// On conflicting flags the active network is left unchanged.
    pub fn select_from_flags(&self, testnet: bool, regtest: bool) -> Result<Network, ChainError> {
        let network = network_from_flags(testnet, regtest).inspect_err(|e| {
            warn!("Keeping {} network: {}", self.active_network(), e);
        })?;
        self.select(network);
        Ok(network)
    }

    pub fn active_network(&self) -> Network {
        *self.active.read()
    }

    /// Parameters of the active network. There is always one.
    pub fn active(&self) -> &'static ChainParams {
        params_for(self.active_network())
    }
}

static GLOBAL_REGISTRY: Lazy<NetworkRegistry> = Lazy::new(NetworkRegistry::new);

/// The process-wide registry.
pub fn global() -> &'static NetworkRegistry {
    &GLOBAL_REGISTRY
}

/// Parameters of the process-wide active network (main until selected).
pub fn params() -> &'static ChainParams {
    GLOBAL_REGISTRY.active()
}

/// Select the process-wide network. Startup only.
pub fn select_params(network: Network) -> &'static ChainParams {
    GLOBAL_REGISTRY.select(network)
}

/// Select the process-wide network from command-line flags. Startup only.
pub fn select_params_from_flags(testnet: bool, regtest: bool) -> Result<Network, ChainError> {
    GLOBAL_REGISTRY.select_from_flags(testnet, regtest)
}
