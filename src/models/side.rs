use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::utils::MatrixError;

/// Which leg of a swap carries the authoritative amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwapSide {
    /// Amount is denominated in the source token
    Sell,
    /// Amount is denominated in the destination token
    Buy,
}

impl SwapSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapSide::Sell => "SELL",
            SwapSide::Buy => "BUY",
        }
    }
}

impl std::fmt::Display for SwapSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapSide {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SELL" => Ok(SwapSide::Sell),
            "BUY" => Ok(SwapSide::Buy),
            other => Err(MatrixError::InvalidScenario(format!("unknown swap side '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_strings() {
        assert_eq!(SwapSide::Sell.to_string(), "SELL");
        assert_eq!("buy".parse::<SwapSide>().unwrap(), SwapSide::Buy);
        assert_eq!(serde_json::to_string(&SwapSide::Buy).unwrap(), "\"BUY\"");
    }
}
