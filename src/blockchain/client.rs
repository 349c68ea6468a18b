use async_trait::async_trait;
use ethers::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use crate::config;
use crate::core::ProviderFactory;
use crate::models::Network;
use crate::utils::{MatrixError, Result};

/// Read-only RPC handle shared by every case of one scenario
#[derive(Debug, Clone)]
pub struct ProviderHandle {
    pub provider: Arc<Provider<Http>>,
    network: Network,
    rpc_url: String,
}

impl ProviderHandle {
    /// Build the handle without touching the network
    pub fn new(rpc_url: &str, network: Network) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| MatrixError::RpcError(
                ProviderError::CustomError(format!("Invalid RPC URL: {}", e))
            ))?;

        Ok(Self {
            provider: Arc::new(provider),
            network,
            rpc_url: rpc_url.to_string(),
        })
    }

    /// Build the handle and check that the endpoint serves `network`
    pub async fn connect(rpc_url: &str, network: Network) -> Result<Self> {
        let handle = Self::new(rpc_url, network)?;
        handle.verify_chain().await?;

        tracing::info!("Connected to {} (chain ID {})", network, network.chain_id());

        Ok(handle)
    }

    pub async fn chain_id(&self) -> Result<u64> {
        let chain_id = self.provider.get_chainid().await?;
        Ok(chain_id.as_u64())
    }

    pub async fn verify_chain(&self) -> Result<()> {
        let actual = self.chain_id().await?;
        let expected = self.network.chain_id();
        if actual != expected {
            return Err(MatrixError::ChainMismatch { expected, actual });
        }
        Ok(())
    }

    /// Native balance of an account
    pub async fn balance(&self, account: Address) -> Result<U256> {
        let balance = self.provider.get_balance(account, None).await?;
        Ok(balance)
    }

    /// Check if address has code
    pub async fn is_contract(&self, address: Address) -> Result<bool> {
        let code = self.provider.get_code(address, None).await?;
        Ok(!code.is_empty())
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

/// Connects to `HTTP_PROVIDER_<chainId>`, or to a per-network override
#[derive(Debug, Clone, Default)]
pub struct RpcProviderFactory {
    overrides: HashMap<Network, String>,
}

impl RpcProviderFactory {
    pub fn new(overrides: HashMap<Network, String>) -> Self {
        Self { overrides }
    }
}

#[async_trait]
impl ProviderFactory for RpcProviderFactory {
    async fn create(&self, network: Network) -> Result<ProviderHandle> {
        let url = config::rpc_endpoint(network, &self.overrides)?;
        ProviderHandle::connect(&url, network).await
    }
}
