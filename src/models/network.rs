use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::utils::MatrixError;

/// EVM networks a scenario can target, keyed by chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Network {
    Mainnet,
    Optimism,
    Bsc,
    Polygon,
    Fantom,
    Base,
    Arbitrum,
    Avalanche,
}

impl Network {
    pub const ALL: [Network; 8] = [
        Network::Mainnet,
        Network::Optimism,
        Network::Bsc,
        Network::Polygon,
        Network::Fantom,
        Network::Base,
        Network::Arbitrum,
        Network::Avalanche,
    ];

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Optimism => 10,
            Network::Bsc => 56,
            Network::Polygon => 137,
            Network::Fantom => 250,
            Network::Base => 8453,
            Network::Arbitrum => 42161,
            Network::Avalanche => 43114,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.chain_id() == chain_id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Optimism => "Optimism",
            Network::Bsc => "Bsc",
            Network::Polygon => "Polygon",
            Network::Fantom => "Fantom",
            Network::Base => "Base",
            Network::Arbitrum => "Arbitrum",
            Network::Avalanche => "Avalanche",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the network name (any case) or its chain id
impl FromStr for Network {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(chain_id) = trimmed.parse::<u64>() {
            return Self::from_chain_id(chain_id)
                .ok_or_else(|| MatrixError::UnknownNetwork(trimmed.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MatrixError::UnknownNetwork(trimmed.to_string()))
    }
}

impl TryFrom<String> for Network {
    type Error = MatrixError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Network> for String {
    fn from(network: Network) -> Self {
        network.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_name_and_chain_id() {
        assert_eq!("polygon".parse::<Network>().unwrap(), Network::Polygon);
        assert_eq!("137".parse::<Network>().unwrap(), Network::Polygon);
        assert_eq!("ARBITRUM".parse::<Network>().unwrap(), Network::Arbitrum);
        assert!("solana".parse::<Network>().is_err());
        assert!("999999".parse::<Network>().is_err());
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Network::Optimism).unwrap();
        assert_eq!(json, "\"Optimism\"");
        let back: Network = serde_json::from_str("\"42161\"").unwrap();
        assert_eq!(back, Network::Arbitrum);
    }
}
