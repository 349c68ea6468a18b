use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::utils::MatrixError;

/// Adapter invocation styles on the aggregator contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractMethod {
    SwapExactAmountIn,
    SwapExactAmountOut,
    SwapExactAmountInOnUniswapV2,
    SwapExactAmountOutOnUniswapV2,
    SwapExactAmountInOnUniswapV3,
    SwapExactAmountOutOnUniswapV3,
    SwapExactAmountInOnBalancerV2,
    SwapExactAmountOutOnBalancerV2,
    SwapExactAmountInOnCurveV1,
    SwapExactAmountInOnCurveV2,
    SimpleSwap,
    MultiSwap,
    MegaSwap,
    SimpleBuy,
    Buy,
    DirectUniV3Swap,
    DirectUniV3Buy,
}

impl ContractMethod {
    pub const ALL: [ContractMethod; 17] = [
        ContractMethod::SwapExactAmountIn,
        ContractMethod::SwapExactAmountOut,
        ContractMethod::SwapExactAmountInOnUniswapV2,
        ContractMethod::SwapExactAmountOutOnUniswapV2,
        ContractMethod::SwapExactAmountInOnUniswapV3,
        ContractMethod::SwapExactAmountOutOnUniswapV3,
        ContractMethod::SwapExactAmountInOnBalancerV2,
        ContractMethod::SwapExactAmountOutOnBalancerV2,
        ContractMethod::SwapExactAmountInOnCurveV1,
        ContractMethod::SwapExactAmountInOnCurveV2,
        ContractMethod::SimpleSwap,
        ContractMethod::MultiSwap,
        ContractMethod::MegaSwap,
        ContractMethod::SimpleBuy,
        ContractMethod::Buy,
        ContractMethod::DirectUniV3Swap,
        ContractMethod::DirectUniV3Buy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractMethod::SwapExactAmountIn => "swapExactAmountIn",
            ContractMethod::SwapExactAmountOut => "swapExactAmountOut",
            ContractMethod::SwapExactAmountInOnUniswapV2 => "swapExactAmountInOnUniswapV2",
            ContractMethod::SwapExactAmountOutOnUniswapV2 => "swapExactAmountOutOnUniswapV2",
            ContractMethod::SwapExactAmountInOnUniswapV3 => "swapExactAmountInOnUniswapV3",
            ContractMethod::SwapExactAmountOutOnUniswapV3 => "swapExactAmountOutOnUniswapV3",
            ContractMethod::SwapExactAmountInOnBalancerV2 => "swapExactAmountInOnBalancerV2",
            ContractMethod::SwapExactAmountOutOnBalancerV2 => "swapExactAmountOutOnBalancerV2",
            ContractMethod::SwapExactAmountInOnCurveV1 => "swapExactAmountInOnCurveV1",
            ContractMethod::SwapExactAmountInOnCurveV2 => "swapExactAmountInOnCurveV2",
            ContractMethod::SimpleSwap => "simpleSwap",
            ContractMethod::MultiSwap => "multiSwap",
            ContractMethod::MegaSwap => "megaSwap",
            ContractMethod::SimpleBuy => "simpleBuy",
            ContractMethod::Buy => "buy",
            ContractMethod::DirectUniV3Swap => "directUniV3Swap",
            ContractMethod::DirectUniV3Buy => "directUniV3Buy",
        }
    }
}

impl std::fmt::Display for ContractMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractMethod {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| MatrixError::InvalidScenario(format!("unknown contract method '{}'", s)))
    }
}
