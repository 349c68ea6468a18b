use async_trait::async_trait;
use ethers::providers::Middleware;
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest, U256};
use crate::blockchain::ProviderHandle;
use crate::contracts::IERC20;
use crate::core::{ExecutionRequest, SwapExecutor};
use crate::models::{SwapSide, TestCase};
use crate::utils::{MatrixError, Result};

/// Receiver for the simulated transfer; never a real recipient
const SINK: &str = "0x000000000000000000000000000000000000dEaD";

/// Whether a holder balance can back a case.
/// BUY amounts are in the destination token, so the source spend is unknown
/// until quoted and any non-zero balance passes.
fn is_funded(side: SwapSide, balance: U256, amount: U256) -> bool {
    match side {
        SwapSide::Sell => balance >= amount,
        SwapSide::Buy => !balance.is_zero(),
    }
}

/// Verifies the holder can fund a case:
/// - provider is on the case's chain
/// - destination token has code (unless native)
/// - holder balance covers the SELL amount, or is non-zero on BUY
/// - for ERC20 sources, `transfer` of the amount does not revert (estimateGas)
pub struct HolderPreflightExecutor {
    check_transfer: bool,
}

impl HolderPreflightExecutor {
    pub fn new() -> Self {
        Self { check_transfer: true }
    }

    /// Skip the estimateGas transfer check
    pub fn without_transfer_check(mut self) -> Self {
        self.check_transfer = false;
        self
    }

    async fn source_balance(&self, provider: &ProviderHandle, case: &TestCase) -> Result<U256> {
        if case.src_token.is_native() {
            return provider.balance(case.src_holder).await;
        }

        let token = IERC20::new(case.src_token.address, provider.provider.clone());
        token.balance_of(case.src_holder).call().await
            .map_err(|e| MatrixError::ContractCallError(
                format!("balanceOf({:?}) on {} failed: {}", case.src_holder, case.src_token.symbol, e)
            ))
    }

    async fn estimate_transfer(&self, provider: &ProviderHandle, case: &TestCase) -> Result<u64> {
        let sink: Address = SINK.parse()
            .map_err(|_| MatrixError::ExecutionError("invalid sink address".to_string()))?;

        let token = IERC20::new(case.src_token.address, provider.provider.clone());
        let calldata = token.transfer(sink, case.amount).calldata()
            .ok_or_else(|| MatrixError::ExecutionError("failed to encode transfer".to_string()))?;

        let tx: TypedTransaction = TransactionRequest {
            from: Some(case.src_holder),
            to: Some(case.src_token.address.into()),
            data: Some(calldata),
            ..Default::default()
        }.into();

        tracing::debug!("Calling eth_estimateGas for {}.transfer(sink, {})...", case.src_token.symbol, case.amount);

        let gas = provider.provider.estimate_gas(&tx, None).await
            .map_err(|e| MatrixError::ExecutionError(
                format!("{} transfer from holder reverted: {}", case.src_token.symbol, e)
            ))?;

        Ok(gas.as_u64())
    }
}

impl Default for HolderPreflightExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapExecutor for HolderPreflightExecutor {
    fn name(&self) -> &'static str {
        "holder-preflight"
    }

    async fn execute(&self, request: &ExecutionRequest) -> Result<()> {
        let case = &request.case;
        let provider = request.provider.as_ref();

        if provider.network() != case.network {
            return Err(MatrixError::ExecutionError(format!(
                "provider serves {}, case targets {}",
                provider.network(), case.network
            )));
        }
        provider.verify_chain().await?;

        if !case.dest_token.is_native() && !provider.is_contract(case.dest_token.address).await? {
            return Err(MatrixError::ExecutionError(format!(
                "{} has no code at {:?}",
                case.dest_token.symbol, case.dest_token.address
            )));
        }

        let balance = self.source_balance(provider, case).await?;
        tracing::debug!(
            "{}: holder {:?} has {} {}",
            case.label(), case.src_holder, balance, case.src_token.symbol
        );

        if !is_funded(case.side, balance, case.amount) {
            return Err(MatrixError::ExecutionError(format!(
                "holder {:?} has {} {}, case needs {}",
                case.src_holder, balance, case.src_token.symbol, case.amount
            )));
        }

        if self.check_transfer && case.side == SwapSide::Sell && !case.src_token.is_native() {
            let gas = self.estimate_transfer(provider, case).await?;
            tracing::debug!("{}: transfer estimate used {} gas", case.label(), gas);
        }

        Ok(())
    }
}
