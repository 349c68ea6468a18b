//! Token, holder and native-symbol lookup tables
//!
//! Scenarios name tokens by symbol; everything below resolves those symbols
//! to addresses for one network. Unknown symbols are configuration errors.

mod tables;

use std::collections::HashMap;
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use crate::models::{Network, Token};
use crate::utils::{MatrixError, Result};

/// Address and decimals of a token, before the address is parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpec {
    pub address: String,
    pub decimals: u8,
}

impl TokenSpec {
    pub fn new(address: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            decimals,
        }
    }
}

/// Lookups the matrix builder depends on
pub trait AssetRegistry: Send + Sync {
    fn token(&self, network: Network, symbol: &str) -> Result<Token>;

    fn holder(&self, network: Network, symbol: &str) -> Result<Address>;

    fn native_symbol(&self, network: Network) -> Result<String>;
}

/// In-memory registry seeded from the built-in tables
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tokens: HashMap<Network, HashMap<String, TokenSpec>>,
    holders: HashMap<Network, HashMap<String, String>>,
    native_symbols: HashMap<Network, String>,
}

impl Registry {
    /// Empty registry, nothing resolves
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self {
            tokens: tables::BUILTIN_TOKENS.clone(),
            holders: tables::BUILTIN_HOLDERS.clone(),
            native_symbols: tables::BUILTIN_NATIVE_SYMBOLS.clone(),
        }
    }

    pub fn insert_token(&mut self, network: Network, symbol: impl Into<String>, spec: TokenSpec) {
        self.tokens
            .entry(network)
            .or_default()
            .insert(symbol.into(), spec);
    }

    pub fn insert_holder(&mut self, network: Network, symbol: impl Into<String>, holder: impl Into<String>) {
        self.holders
            .entry(network)
            .or_default()
            .insert(symbol.into(), holder.into());
    }

    /// Symbols known for a network, sorted
    pub fn symbols(&self, network: Network) -> Vec<String> {
        let mut symbols: Vec<String> = self
            .tokens
            .get(&network)
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default();
        symbols.sort();
        symbols
    }
}

fn parse_address(raw: &str, network: Network, symbol: &str) -> Result<Address> {
    raw.parse().map_err(|_| {
        MatrixError::InvalidScenario(format!(
            "malformed address '{}' for {} on {}",
            raw, symbol, network
        ))
    })
}

impl AssetRegistry for Registry {
    fn token(&self, network: Network, symbol: &str) -> Result<Token> {
        let spec = self
            .tokens
            .get(&network)
            .and_then(|t| t.get(symbol))
            .ok_or_else(|| MatrixError::UnknownToken {
                network: network.to_string(),
                symbol: symbol.to_string(),
            })?;

        let address = parse_address(&spec.address, network, symbol)?;
        Ok(Token::new(symbol, address, spec.decimals))
    }

    fn holder(&self, network: Network, symbol: &str) -> Result<Address> {
        let raw = self
            .holders
            .get(&network)
            .and_then(|h| h.get(symbol))
            .ok_or_else(|| MatrixError::UnknownHolder {
                network: network.to_string(),
                symbol: symbol.to_string(),
            })?;

        parse_address(raw, network, symbol)
    }

    fn native_symbol(&self, network: Network) -> Result<String> {
        self.native_symbols
            .get(&network)
            .cloned()
            .ok_or_else(|| MatrixError::MissingNativeSymbol(network.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolves_every_table_entry() {
        let registry = Registry::builtin();
        for network in Network::ALL {
            let native = registry.native_symbol(network).unwrap();
            let token = registry.token(network, &native).unwrap();
            assert!(token.is_native(), "{} native token on {}", native, network);

            for symbol in registry.symbols(network) {
                registry.token(network, &symbol).unwrap();
                registry.holder(network, &symbol).unwrap();
            }
        }
    }

    #[test]
    fn test_polygon_lookup() {
        let registry = Registry::builtin();
        let usdc = registry.token(Network::Polygon, "USDC").unwrap();
        assert_eq!(usdc.decimals, 6);
        assert_eq!(registry.native_symbol(Network::Polygon).unwrap(), "MATIC");
    }

    #[test]
    fn test_unknown_symbol_is_lookup_error() {
        let registry = Registry::builtin();
        let err = registry.token(Network::Polygon, "NOPE").unwrap_err();
        assert!(matches!(err, MatrixError::UnknownToken { .. }));
        assert!(err.is_configuration());

        let err = registry.holder(Network::Base, "NOPE").unwrap_err();
        assert!(matches!(err, MatrixError::UnknownHolder { .. }));
    }

    #[test]
    fn test_empty_registry_has_no_native_symbol() {
        let registry = Registry::new();
        assert!(matches!(
            registry.native_symbol(Network::Mainnet),
            Err(MatrixError::MissingNativeSymbol(_))
        ));
    }

    #[test]
    fn test_insert_extends_and_validates() {
        let mut registry = Registry::new();
        registry.insert_token(Network::Base, "BAD", TokenSpec::new("0xnothex", 18));
        assert!(matches!(
            registry.token(Network::Base, "BAD"),
            Err(MatrixError::InvalidScenario(_))
        ));

        registry.insert_token(
            Network::Base,
            "AERO",
            TokenSpec::new("0x940181a94A35A4569E4529A3CDfB74e38FD98631", 18),
        );
        assert_eq!(registry.token(Network::Base, "AERO").unwrap().symbol, "AERO");
    }
}
