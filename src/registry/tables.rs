//! Built-in token and holder tables per network
//!
//! Holders are accounts with enough balance to fund the default amounts
//! on a fork. Native-currency holders are the wrapped-native contracts.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use crate::models::{Network, NATIVE_TOKEN_ADDRESS};
use super::TokenSpec;

pub(crate) struct NetworkTable {
    pub native_symbol: &'static str,
    pub tokens: &'static [(&'static str, &'static str, u8)],
    pub holders: &'static [(&'static str, &'static str)],
}

const BINANCE_HOT_WALLET: &str = "0xF977814e90dA44bFA03b6295A0616a897441aceC";

static MAINNET: NetworkTable = NetworkTable {
    native_symbol: "ETH",
    tokens: &[
        ("ETH", NATIVE_TOKEN_ADDRESS, 18),
        ("WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18),
        ("USDC", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6),
        ("USDT", "0xdAC17F958D2ee523a2206206994597C13D831ec7", 6),
        ("DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F", 18),
    ],
    holders: &[
        ("ETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        ("WETH", BINANCE_HOT_WALLET),
        ("USDC", BINANCE_HOT_WALLET),
        ("USDT", BINANCE_HOT_WALLET),
        ("DAI", BINANCE_HOT_WALLET),
    ],
};

static OPTIMISM: NetworkTable = NetworkTable {
    native_symbol: "ETH",
    tokens: &[
        ("ETH", NATIVE_TOKEN_ADDRESS, 18),
        ("WETH", "0x4200000000000000000000000000000000000006", 18),
        ("USDC", "0x0b2C639c533813f4Aa9D7837cAf62653d097Ff85", 6),
        ("USDT", "0x94b008aA00579c1307B0EF2c499aD98a8ce58e58", 6),
        ("DAI", "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1", 18),
    ],
    holders: &[
        ("ETH", "0x4200000000000000000000000000000000000006"),
        ("WETH", BINANCE_HOT_WALLET),
        ("USDC", BINANCE_HOT_WALLET),
        ("USDT", BINANCE_HOT_WALLET),
        ("DAI", BINANCE_HOT_WALLET),
    ],
};

static BSC: NetworkTable = NetworkTable {
    native_symbol: "BNB",
    tokens: &[
        ("BNB", NATIVE_TOKEN_ADDRESS, 18),
        ("WBNB", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", 18),
        ("USDT", "0x55d398326f99059fF775485246999027B3197955", 18),
    ],
    holders: &[
        ("BNB", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
        ("WBNB", BINANCE_HOT_WALLET),
        ("USDT", BINANCE_HOT_WALLET),
    ],
};

static POLYGON: NetworkTable = NetworkTable {
    native_symbol: "MATIC",
    tokens: &[
        ("MATIC", NATIVE_TOKEN_ADDRESS, 18),
        ("WMATIC", "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270", 18),
        ("USDC", "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174", 6),
        ("USDT", "0xc2132D05D31c914a87C6611C10748AEb04B58e8F", 6),
        ("DAI", "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063", 18),
        ("WETH", "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619", 18),
    ],
    holders: &[
        ("MATIC", "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
        ("WMATIC", BINANCE_HOT_WALLET),
        ("USDC", BINANCE_HOT_WALLET),
        ("USDT", BINANCE_HOT_WALLET),
        ("DAI", BINANCE_HOT_WALLET),
        ("WETH", BINANCE_HOT_WALLET),
    ],
};

static FANTOM: NetworkTable = NetworkTable {
    native_symbol: "FTM",
    tokens: &[
        ("FTM", NATIVE_TOKEN_ADDRESS, 18),
        ("WFTM", "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83", 18),
    ],
    holders: &[
        ("FTM", "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
        ("WFTM", BINANCE_HOT_WALLET),
    ],
};

static BASE: NetworkTable = NetworkTable {
    native_symbol: "ETH",
    tokens: &[
        ("ETH", NATIVE_TOKEN_ADDRESS, 18),
        ("WETH", "0x4200000000000000000000000000000000000006", 18),
        ("USDC", "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", 6),
    ],
    holders: &[
        ("ETH", "0x4200000000000000000000000000000000000006"),
        ("WETH", BINANCE_HOT_WALLET),
        ("USDC", BINANCE_HOT_WALLET),
    ],
};

static ARBITRUM: NetworkTable = NetworkTable {
    native_symbol: "ETH",
    tokens: &[
        ("ETH", NATIVE_TOKEN_ADDRESS, 18),
        ("WETH", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1", 18),
        ("USDC", "0xaf88d065e77c8cC2239327C5EDb3A432268e5831", 6),
        ("USDCe", "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8", 6),
        ("USDT", "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9", 6),
        ("DAI", "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1", 18),
        ("RDPX", "0x32Eb7902D4134bf98A28b963D26de779AF92A212", 18),
    ],
    holders: &[
        ("ETH", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
        ("WETH", BINANCE_HOT_WALLET),
        ("USDC", BINANCE_HOT_WALLET),
        ("USDCe", BINANCE_HOT_WALLET),
        ("USDT", BINANCE_HOT_WALLET),
        ("DAI", BINANCE_HOT_WALLET),
        ("RDPX", BINANCE_HOT_WALLET),
    ],
};

static AVALANCHE: NetworkTable = NetworkTable {
    native_symbol: "AVAX",
    tokens: &[
        ("AVAX", NATIVE_TOKEN_ADDRESS, 18),
        ("WAVAX", "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7", 18),
        ("USDC", "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E", 6),
    ],
    holders: &[
        ("AVAX", "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
        ("WAVAX", BINANCE_HOT_WALLET),
        ("USDC", BINANCE_HOT_WALLET),
    ],
};

fn table_for(network: Network) -> &'static NetworkTable {
    match network {
        Network::Mainnet => &MAINNET,
        Network::Optimism => &OPTIMISM,
        Network::Bsc => &BSC,
        Network::Polygon => &POLYGON,
        Network::Fantom => &FANTOM,
        Network::Base => &BASE,
        Network::Arbitrum => &ARBITRUM,
        Network::Avalanche => &AVALANCHE,
    }
}

pub(crate) static BUILTIN_TOKENS: Lazy<HashMap<Network, HashMap<String, TokenSpec>>> = Lazy::new(|| {
    Network::ALL
        .into_iter()
        .map(|network| {
            let tokens = table_for(network)
                .tokens
                .iter()
                .map(|(symbol, address, decimals)| {
                    (symbol.to_string(), TokenSpec::new(*address, *decimals))
                })
                .collect();
            (network, tokens)
        })
        .collect()
});

pub(crate) static BUILTIN_HOLDERS: Lazy<HashMap<Network, HashMap<String, String>>> = Lazy::new(|| {
    Network::ALL
        .into_iter()
        .map(|network| {
            let holders = table_for(network)
                .holders
                .iter()
                .map(|(symbol, holder)| (symbol.to_string(), holder.to_string()))
                .collect();
            (network, holders)
        })
        .collect()
});

pub(crate) static BUILTIN_NATIVE_SYMBOLS: Lazy<HashMap<Network, String>> = Lazy::new(|| {
    Network::ALL
        .into_iter()
        .map(|network| (network, table_for(network).native_symbol.to_string()))
        .collect()
});
