//! Built-in Algebra-family scenarios

use crate::config::{DexSuite, MatrixConfig, PairGroup};
use crate::matrix::SideMethods;
use crate::models::{Network, TransferFeeParams};

fn group(
    label: &str,
    network: Network,
    pair: (&str, &str),
    amounts: (&str, &str),
    native_amount: &str,
) -> PairGroup {
    PairGroup {
        label: label.to_string(),
        network,
        token_a: pair.0.to_string(),
        token_b: pair.1.to_string(),
        amount_a: amounts.0.to_string(),
        amount_b: amounts.1.to_string(),
        native_amount: native_amount.to_string(),
        transfer_fees: TransferFeeParams::default(),
        side_methods: SideMethods::default(),
    }
}

pub fn algebra() -> MatrixConfig {
    MatrixConfig {
        name: "Algebra".to_string(),
        suites: vec![
            DexSuite {
                dex_key: "QuickSwapV3".to_string(),
                groups: vec![group(
                    "Polygon_V6",
                    Network::Polygon,
                    ("USDC", "DAI"),
                    ("1000000000", "1000000000000000000000"),
                    "1000000000000000000",
                )],
            },
            DexSuite {
                dex_key: "ZyberSwapV3".to_string(),
                groups: vec![
                    group(
                        "Arbitrum",
                        Network::Arbitrum,
                        ("USDC", "DAI"),
                        ("1000000000", "1000000000000000000000"),
                        "1000000000000000000",
                    ),
                    group(
                        "Optimism",
                        Network::Optimism,
                        ("USDC", "USDT"),
                        ("100000000", "50000"),
                        "100000000000000",
                    ),
                ],
            },
            DexSuite {
                dex_key: "CamelotV3".to_string(),
                groups: vec![
                    PairGroup {
                        transfer_fees: TransferFeeParams::src_dex(1000),
                        ..group(
                            "Arbitrum: Tax Tokens",
                            Network::Arbitrum,
                            ("RDPX", "WETH"),
                            ("100000000000000000000", "100000000000000000"),
                            "1000000000000000000",
                        )
                    },
                    group(
                        "Arbitrum: Non-Tax tokens",
                        Network::Arbitrum,
                        ("USDCe", "USDT"),
                        ("1000000000", "1000000000"),
                        "1000000000000000000",
                    ),
                ],
            },
        ],
        extra_tokens: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::MatrixBuilder;
    use crate::registry::Registry;

    #[test]
    fn test_catalog_is_valid_and_resolvable() {
        let config = algebra();
        config.validate().unwrap();

        let registry = Registry::builtin();
        let builder = MatrixBuilder::new(&registry);
        for labeled in config.scenarios() {
            let cases = builder.expand(&labeled.scenario).unwrap();
            assert_eq!(cases.len(), 4, "{} / {}", labeled.dex_key, labeled.group);
        }
    }

    #[test]
    fn test_tax_group_reverses_dex_fee() {
        let registry = Registry::builtin();
        let tax = algebra()
            .scenarios()
            .into_iter()
            .find(|s| s.group == "Arbitrum: Tax Tokens")
            .unwrap();

        let cases = MatrixBuilder::new(&registry).expand(&tax.scenario).unwrap();
        let dex_fees: Vec<(u64, u64)> = cases
            .iter()
            .map(|c| (c.transfer_fees.src_dex_fee, c.transfer_fees.dest_dex_fee))
            .collect();
        assert_eq!(dex_fees, vec![(1000, 0), (0, 1000), (0, 1000), (1000, 0)]);
    }
}
