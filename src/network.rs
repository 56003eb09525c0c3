//! Network identifiers

use crate::error::ChainError;
use std::fmt;
use std::str::FromStr;

/// The three independent Bittropolis networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Main,
    Testnet,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Subdirectory of the data root that holds this network's state.
    /// The main network uses the data root itself.
    pub fn data_dir_name(&self) -> &'static str {
        match self {
            Network::Main => "",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(ChainError::UnknownNetwork(other.to_string())),
        }
    }
}

impl TryFrom<u8> for Network {
    type Error = ChainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Network::Main),
            1 => Ok(Network::Testnet),
            2 => Ok(Network::Regtest),
            other => Err(ChainError::UnknownNetwork(format!("id {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_main() {
        assert_eq!(Network::default(), Network::Main);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("TestNet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!(" regtest ".parse::<Network>().unwrap(), Network::Regtest);
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_unknown_network() {
        let err = "signet".parse::<Network>().unwrap_err();
        assert_eq!(err, ChainError::UnknownNetwork("signet".to_string()));
        assert!(Network::try_from(3).is_err());
        assert_eq!(Network::try_from(2).unwrap(), Network::Regtest);
    }

    #[test]
    fn test_data_dir_names() {
        assert_eq!(Network::Main.data_dir_name(), "");
        assert_eq!(Network::Testnet.data_dir_name(), "testnet");
        assert_eq!(Network::Regtest.data_dir_name(), "regtest");
    }
}
