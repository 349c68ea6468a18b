use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};
use super::{ContractMethod, Network, SwapSide, Token, TransferFeeParams};

/// One fully resolved swap scenario handed to the executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub src_token: Token,
    pub dest_token: Token,
    pub src_holder: Address,
    pub amount: U256,
    pub side: SwapSide,
    pub dex_key: String,
    pub contract_method: ContractMethod,
    pub network: Network,
    pub transfer_fees: TransferFeeParams,
}

impl TestCase {
    /// `<network>/<side>/<contractMethod>/<src> -> <dest>`
    pub fn label(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.network,
            self.side,
            self.contract_method,
            self.pair_label()
        )
    }

    pub fn pair_label(&self) -> String {
        format!("{} -> {}", self.src_token.symbol, self.dest_token.symbol)
    }
}
