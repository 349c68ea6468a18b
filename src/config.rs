//! Scenario files and environment
//!
//! A scenario file lists DEX suites, each with one or more pair groups:
//!
//! ```json
//! {
//!   "name": "Algebra",
//!   "suites": [{
//!     "dexKey": "QuickSwapV3",
//!     "groups": [{
//!       "label": "Polygon_V6",
//!       "network": "Polygon",
//!       "tokenA": "USDC", "tokenB": "DAI",
//!       "amountA": "1000000000",
//!       "amountB": "1000000000000000000000",
//!       "nativeAmount": "1000000000000000000"
//!     }]
//!   }]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::matrix::{Scenario, SideMethods};
use crate::models::{Network, TransferFeeParams};
use crate::registry::{Registry, TokenSpec};
use crate::utils::{MatrixError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairGroup {
    pub label: String,
    pub network: Network,
    pub token_a: String,
    pub token_b: String,
    pub amount_a: String,
    pub amount_b: String,
    pub native_amount: String,
    #[serde(default)]
    pub transfer_fees: TransferFeeParams,
    #[serde(default)]
    pub side_methods: SideMethods,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexSuite {
    pub dex_key: String,
    pub groups: Vec<PairGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraToken {
    pub network: Network,
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
    /// Funded account for this token, if the built-in tables lack one
    #[serde(default)]
    pub holder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub suites: Vec<DexSuite>,
    #[serde(default)]
    pub extra_tokens: Vec<ExtraToken>,
}

fn default_name() -> String {
    "swap-matrix".to_string()
}

/// One scenario with the labels it is registered under
#[derive(Debug, Clone)]
pub struct LabeledScenario {
    pub dex_key: String,
    pub group: String,
    pub scenario: Scenario,
}

impl MatrixConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading scenarios from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        for suite in &self.suites {
            if suite.groups.is_empty() {
                return Err(MatrixError::InvalidScenario(format!(
                    "suite {} has no groups",
                    suite.dex_key
                )));
            }
        }
        for scenario in self.scenarios() {
            scenario.scenario.validate()?;
        }
        Ok(())
    }

    /// Keep only suites matching `dex` and groups matching `network`
    pub fn filtered(mut self, dex: Option<&str>, network: Option<Network>) -> Self {
        if let Some(dex) = dex {
            self.suites.retain(|s| s.dex_key.eq_ignore_ascii_case(dex));
        }
        if let Some(network) = network {
            for suite in &mut self.suites {
                suite.groups.retain(|g| g.network == network);
            }
            self.suites.retain(|s| !s.groups.is_empty());
        }
        self
    }

    pub fn scenarios(&self) -> Vec<LabeledScenario> {
        self.suites
            .iter()
            .flat_map(|suite| {
                suite.groups.iter().map(move |group| LabeledScenario {
                    dex_key: suite.dex_key.clone(),
                    group: group.label.clone(),
                    scenario: Scenario::new(
                        group.network,
                        suite.dex_key.clone(),
                        group.token_a.clone(),
                        group.token_b.clone(),
                        group.amount_a.clone(),
                        group.amount_b.clone(),
                        group.native_amount.clone(),
                    )
                    .with_transfer_fees(group.transfer_fees)
                    .with_side_methods(group.side_methods.clone()),
                })
            })
            .collect()
    }

    /// Add `extraTokens` entries to a registry
    pub fn extend_registry(&self, registry: &mut Registry) {
        for extra in &self.extra_tokens {
            registry.insert_token(
                extra.network,
                extra.symbol.clone(),
                TokenSpec::new(extra.address.clone(), extra.decimals),
            );
            if let Some(holder) = &extra.holder {
                registry.insert_holder(extra.network, extra.symbol.clone(), holder.clone());
            }
        }
    }
}

/// Load `.env` from the working directory if there is one
pub fn load_env() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
}

/// Name of the variable holding a network's RPC endpoint
pub fn rpc_env_var(network: Network) -> String {
    format!("HTTP_PROVIDER_{}", network.chain_id())
}

/// RPC endpoint for a network: explicit override first, then `HTTP_PROVIDER_<chainId>`
pub fn rpc_endpoint(network: Network, overrides: &HashMap<Network, String>) -> Result<String> {
    if let Some(url) = overrides.get(&network) {
        return Ok(url.clone());
    }
    let var = rpc_env_var(network);
    match std::env::var(&var) {
        Ok(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(MatrixError::MissingRpcEndpoint {
            network: network.to_string(),
            var,
        }),
    }
}

/// Parse a `<network>=<url>` endpoint override
pub fn parse_rpc_override(raw: &str) -> Result<(Network, String)> {
    let (network, url) = raw.split_once('=').ok_or_else(|| {
        MatrixError::InvalidScenario(format!("expected <network>=<url>, got '{}'", raw))
    })?;
    let url = url.trim();
    if url.is_empty() {
        return Err(MatrixError::InvalidScenario(format!("empty RPC url in '{}'", raw)));
    }
    Ok((network.parse()?, url.to_string()))
}
