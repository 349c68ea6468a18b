use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Token {symbol} is not registered on {network}")]
    UnknownToken { network: String, symbol: String },

    #[error("No holder registered for {symbol} on {network}")]
    UnknownHolder { network: String, symbol: String },

    #[error("No native token symbol registered for {0}")]
    MissingNativeSymbol(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("No RPC endpoint for {network} (set {var})")]
    MissingRpcEndpoint { network: String, var: String },

    #[error("Provider is on chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("RPC error: {0}")]
    RpcError(#[from] ethers::providers::ProviderError),

    #[error("Contract call failed: {0}")]
    ContractCallError(String),

    #[error("Swap execution failed: {0}")]
    ExecutionError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MatrixError {
    /// Lookup and configuration failures. These abort a whole scenario
    /// instead of failing a single case.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MatrixError::UnknownNetwork(_)
                | MatrixError::UnknownToken { .. }
                | MatrixError::UnknownHolder { .. }
                | MatrixError::MissingNativeSymbol(_)
                | MatrixError::InvalidAmount(_)
                | MatrixError::InvalidScenario(_)
                | MatrixError::MissingRpcEndpoint { .. }
                | MatrixError::ChainMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
