use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Placeholder address the aggregator uses for the chain's native currency
pub const NATIVE_TOKEN_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// `NATIVE_TOKEN_ADDRESS` as an address
pub fn native_token_address() -> Address {
    Address::repeat_byte(0xee)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
}

impl Token {
    pub fn new(symbol: impl Into<String>, address: Address, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            address,
            decimals,
        }
    }

    pub fn is_native(&self) -> bool {
        self.address == native_token_address()
    }
}
