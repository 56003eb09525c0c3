//! Configuration management for Bittropolis
//!
//! The node reads an optional TOML file:
//!
//! ```toml
//! [network]
//! testnet = false
//! regtest = true
//!
//! [storage]
//! data_root = "/var/lib/bittropolis"
//! ```
//!
//! Command-line flags are OR-ed with the file's network flags before a
//! network is chosen.

use crate::error::ChainError;
use crate::network::Network;
use crate::registry::network_from_flags;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "bittropolis.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    #[serde(default)]
    pub testnet: bool,
    #[serde(default)]
    pub regtest: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
        }
    }
}

impl Config {
    /// Combine the file's network flags with the command-line ones.
    pub fn network_flags(&self, testnet: bool, regtest: bool) -> (bool, bool) {
        (self.network.testnet || testnet, self.network.regtest || regtest)
    }

    /// The network this configuration asks for, given extra command-line flags.
    pub fn requested_network(&self, testnet: bool, regtest: bool) -> Result<Network, ChainError> {
        let (testnet, regtest) = self.network_flags(testnet, regtest);
        network_from_flags(testnet, regtest)
    }
}

/// Load configuration from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, ChainError> {
    let config_str = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    if config.storage.data_root.as_os_str().is_empty() {
        return Err(ChainError::ConfigError(
            "storage.data_root must not be empty".to_string(),
        ));
    }

    Ok(config)
}

fn default_data_root() -> PathBuf {
    PathBuf::from("./data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.data_root, PathBuf::from("./data"));
        assert_eq!(config.requested_network(false, false).unwrap(), Network::Main);
    }

    #[test]
    fn test_file_flags_combine_with_cli() {
        let file = write_config("[network]\nregtest = true\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.requested_network(false, false).unwrap(), Network::Regtest);
        assert_eq!(
            config.requested_network(true, false),
            Err(ChainError::ConflictingNetworks)
        );
    }

    #[test]
    fn test_storage_root() {
        let file = write_config("[storage]\ndata_root = \"/srv/bittropolis\"\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.storage.data_root, PathBuf::from("/srv/bittropolis"));
        assert!(!config.network.testnet);
    }

    #[test]
    fn test_empty_data_root_rejected() {
        let file = write_config("[storage]\ndata_root = \"\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("storage.data_root"));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[network\ntestnet = yes");
        assert!(matches!(
            load_config(file.path()),
            Err(ChainError::ConfigError(_))
        ));
    }
}
