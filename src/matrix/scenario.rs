use ethers::types::U256;
use serde::{Deserialize, Serialize};
use crate::models::{Network, TransferFeeParams};
use crate::utils::{MatrixError, Result};
use super::SideMethods;

/// One (network, dex, pair) combination under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub network: Network,
    pub dex_key: String,
    pub token_a: String,
    pub token_b: String,
    /// Token A amount, in token A base units
    pub amount_a: String,
    /// Token B amount, in token B base units
    pub amount_b: String,
    /// Native currency amount, in wei
    pub native_amount: String,
    #[serde(default)]
    pub transfer_fees: TransferFeeParams,
    #[serde(default)]
    pub side_methods: SideMethods,
}

impl Scenario {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        network: Network,
        dex_key: impl Into<String>,
        token_a: impl Into<String>,
        token_b: impl Into<String>,
        amount_a: impl Into<String>,
        amount_b: impl Into<String>,
        native_amount: impl Into<String>,
    ) -> Self {
        Self {
            network,
            dex_key: dex_key.into(),
            token_a: token_a.into(),
            token_b: token_b.into(),
            amount_a: amount_a.into(),
            amount_b: amount_b.into(),
            native_amount: native_amount.into(),
            transfer_fees: TransferFeeParams::default(),
            side_methods: SideMethods::default(),
        }
    }

    pub fn with_transfer_fees(mut self, fees: TransferFeeParams) -> Self {
        self.transfer_fees = fees;
        self
    }

    pub fn with_side_methods(mut self, side_methods: SideMethods) -> Self {
        self.side_methods = side_methods;
        self
    }

    /// Checks that do not need the registry
    pub fn validate(&self) -> Result<()> {
        if self.dex_key.trim().is_empty() {
            return Err(MatrixError::InvalidScenario("empty dex key".to_string()));
        }
        if self.token_a == self.token_b {
            return Err(MatrixError::InvalidScenario(format!(
                "token pair must be distinct, got {} twice",
                self.token_a
            )));
        }
        parse_amount(&self.amount_a)?;
        parse_amount(&self.amount_b)?;
        parse_amount(&self.native_amount)?;
        Ok(())
    }
}

/// Positive decimal integer in base units
pub fn parse_amount(raw: &str) -> Result<U256> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MatrixError::InvalidAmount(format!("'{}' is not a decimal integer", raw)));
    }
    let amount = U256::from_dec_str(trimmed)
        .map_err(|e| MatrixError::InvalidAmount(format!("'{}': {}", raw, e)))?;
    if amount.is_zero() {
        return Err(MatrixError::InvalidAmount(format!("'{}' must be positive", raw)));
    }
    Ok(amount)
}
