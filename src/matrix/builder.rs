//! Scenario expansion and registration

use std::sync::Arc;
use ethers::types::{Address, U256};
use crate::blockchain::ProviderHandle;
use crate::core::{CaseRegistrar, ExecutionRequest, RegisteredCase, SwapExecutor};
use crate::models::{ContractMethod, SwapSide, TestCase, Token, TransferFeeParams};
use crate::registry::AssetRegistry;
use crate::utils::Result;
use super::{parse_amount, Scenario};

/// A source token that is taxed inside the DEX cannot be bought: BUY amounts
/// are destination-denominated and the executor models the tax as a
/// deduction on the source leg.
pub fn is_untestable_combination(side: SwapSide, fees: &TransferFeeParams) -> bool {
    side == SwapSide::Buy && fees.has_src_dex_fee()
}

/// The four directed legs expanded for every (side, method) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    AToB,
    BToA,
    NativeToA,
    AToNative,
}

impl Leg {
    pub const ALL: [Leg; 4] = [Leg::AToB, Leg::BToA, Leg::NativeToA, Leg::AToNative];

    /// Legs on which the caller's DEX fees are read the other way round
    pub fn swaps_dex_fees(&self) -> bool {
        matches!(self, Leg::BToA | Leg::NativeToA)
    }

    pub fn fees(&self, fees: &TransferFeeParams) -> TransferFeeParams {
        if self.swaps_dex_fees() {
            fees.with_dex_fees_swapped()
        } else {
            *fees
        }
    }
}

/// Cases for one contract method on one side
#[derive(Debug, Clone)]
pub struct MethodGroup {
    pub contract_method: ContractMethod,
    pub skipped: bool,
    pub cases: Vec<TestCase>,
}

/// Method groups for one side, in declaration order
#[derive(Debug, Clone)]
pub struct SideGroup {
    pub side: SwapSide,
    pub methods: Vec<MethodGroup>,
}

struct ResolvedLeg<'r> {
    src: &'r Token,
    dest: &'r Token,
    holder: Address,
    sell_amount: U256,
    buy_amount: U256,
}

/// Registry lookups and parsed amounts for one scenario
struct Resolved {
    token_a: Token,
    token_b: Token,
    native: Token,
    holder_a: Address,
    holder_b: Address,
    holder_native: Address,
    amount_a: U256,
    amount_b: U256,
    native_amount: U256,
}

impl Resolved {
    fn leg(&self, leg: Leg) -> ResolvedLeg<'_> {
        match leg {
            Leg::AToB => ResolvedLeg {
                src: &self.token_a,
                dest: &self.token_b,
                holder: self.holder_a,
                sell_amount: self.amount_a,
                buy_amount: self.amount_b,
            },
            Leg::BToA => ResolvedLeg {
                src: &self.token_b,
                dest: &self.token_a,
                holder: self.holder_b,
                sell_amount: self.amount_b,
                buy_amount: self.amount_a,
            },
            Leg::NativeToA => ResolvedLeg {
                src: &self.native,
                dest: &self.token_a,
                holder: self.holder_native,
                sell_amount: self.native_amount,
                buy_amount: self.amount_a,
            },
            Leg::AToNative => ResolvedLeg {
                src: &self.token_a,
                dest: &self.native,
                holder: self.holder_a,
                sell_amount: self.amount_a,
                buy_amount: self.native_amount,
            },
        }
    }
}

/// Expands scenarios into test cases. Holds no state between calls.
pub struct MatrixBuilder<'a> {
    registry: &'a dyn AssetRegistry,
}

impl<'a> MatrixBuilder<'a> {
    pub fn new(registry: &'a dyn AssetRegistry) -> Self {
        Self { registry }
    }

    fn resolve(&self, scenario: &Scenario) -> Result<Resolved> {
        scenario.validate()?;

        let network = scenario.network;
        let native_symbol = self.registry.native_symbol(network)?;

        Ok(Resolved {
            token_a: self.registry.token(network, &scenario.token_a)?,
            token_b: self.registry.token(network, &scenario.token_b)?,
            native: self.registry.token(network, &native_symbol)?,
            holder_a: self.registry.holder(network, &scenario.token_a)?,
            holder_b: self.registry.holder(network, &scenario.token_b)?,
            holder_native: self.registry.holder(network, &native_symbol)?,
            amount_a: parse_amount(&scenario.amount_a)?,
            amount_b: parse_amount(&scenario.amount_b)?,
            native_amount: parse_amount(&scenario.native_amount)?,
        })
    }

    /// Resolve every case of the scenario, grouped by side then method.
    ///
    /// All lookups happen here, so an unknown symbol fails the whole
    /// scenario before anything is registered.
    pub fn expand_groups(&self, scenario: &Scenario) -> Result<Vec<SideGroup>> {
        let resolved = self.resolve(scenario)?;
        let fees = &scenario.transfer_fees;

        let groups = scenario
            .side_methods
            .iter()
            .map(|(side, methods)| SideGroup {
                side,
                methods: methods
                    .iter()
                    .map(|&contract_method| {
                        if is_untestable_combination(side, fees) {
                            tracing::debug!(
                                "Skipping {}/{}/{}: source token carries a DEX fee",
                                scenario.network, side, contract_method
                            );
                            return MethodGroup {
                                contract_method,
                                skipped: true,
                                cases: Vec::new(),
                            };
                        }

                        let cases = Leg::ALL
                            .iter()
                            .map(|&leg| {
                                let resolved_leg = resolved.leg(leg);
                                TestCase {
                                    src_token: resolved_leg.src.clone(),
                                    dest_token: resolved_leg.dest.clone(),
                                    src_holder: resolved_leg.holder,
                                    amount: match side {
                                        SwapSide::Sell => resolved_leg.sell_amount,
                                        SwapSide::Buy => resolved_leg.buy_amount,
                                    },
                                    side,
                                    dex_key: scenario.dex_key.clone(),
                                    contract_method,
                                    network: scenario.network,
                                    transfer_fees: leg.fees(fees),
                                }
                            })
                            .collect();

                        MethodGroup {
                            contract_method,
                            skipped: false,
                            cases,
                        }
                    })
                    .collect(),
            })
            .collect();

        Ok(groups)
    }

    /// Flat list of cases in registration order
    pub fn expand(&self, scenario: &Scenario) -> Result<Vec<TestCase>> {
        let cases = self
            .expand_groups(scenario)?
            .into_iter()
            .flat_map(|side| side.methods)
            .flat_map(|method| method.cases)
            .collect();
        Ok(cases)
    }

    /// Register the scenario as `network > side > method > case`.
    ///
    /// Skipped method groups are still opened, with no cases in them.
    /// Returns the number of cases registered.
    pub fn register<R: CaseRegistrar>(
        &self,
        scenario: &Scenario,
        provider: Arc<ProviderHandle>,
        executor: Arc<dyn SwapExecutor>,
        registrar: &mut R,
    ) -> Result<usize> {
        let groups = self.expand_groups(scenario)?;
        let registered: usize = groups
            .iter()
            .flat_map(|g| &g.methods)
            .map(|m| m.cases.len())
            .sum();

        registrar.describe(&scenario.network.to_string(), |r| {
            for side_group in &groups {
                r.describe(side_group.side.as_str(), |r| {
                    for method_group in &side_group.methods {
                        r.describe(method_group.contract_method.as_str(), |r| {
                            for case in &method_group.cases {
                                let request = ExecutionRequest::new(case.clone(), provider.clone());
                                r.it(RegisteredCase::new(request, executor.clone()));
                            }
                        });
                    }
                });
            }
        });

        tracing::info!(
            "Registered {} cases for {} on {} ({} / {})",
            registered, scenario.dex_key, scenario.network, scenario.token_a, scenario.token_b
        );

        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SideMethods;
    use crate::models::Network;
    use crate::registry::Registry;

    fn quickswap() -> Scenario {
        Scenario::new(
            Network::Polygon,
            "QuickSwapV3",
            "USDC",
            "DAI",
            "1000000000",
            "1000000000000000000000",
            "1000000000000000000",
        )
    }

    fn labels(cases: &[TestCase]) -> Vec<String> {
        cases.iter().map(TestCase::pair_label).collect()
    }

    #[test]
    fn test_skip_predicate() {
        let taxed = TransferFeeParams::src_dex(1000);
        assert!(is_untestable_combination(SwapSide::Buy, &taxed));
        assert!(!is_untestable_combination(SwapSide::Sell, &taxed));
        assert!(!is_untestable_combination(SwapSide::Buy, &TransferFeeParams::default()));
        // only the source DEX fee matters
        let dest_taxed = TransferFeeParams::new(5, 5, 0, 1000);
        assert!(!is_untestable_combination(SwapSide::Buy, &dest_taxed));
    }

    #[test]
    fn test_leg_fee_orientation() {
        let fees = TransferFeeParams::new(1, 2, 3, 4);
        assert_eq!(Leg::AToB.fees(&fees), fees);
        assert_eq!(Leg::BToA.fees(&fees), TransferFeeParams::new(1, 2, 4, 3));
        assert_eq!(Leg::NativeToA.fees(&fees), TransferFeeParams::new(1, 2, 4, 3));
        assert_eq!(Leg::AToNative.fees(&fees), fees);
    }

    #[test]
    fn test_sell_expansion_shape() {
        let registry = Registry::builtin();
        let cases = MatrixBuilder::new(&registry).expand(&quickswap()).unwrap();

        assert_eq!(
            labels(&cases),
            vec!["USDC -> DAI", "DAI -> USDC", "MATIC -> USDC", "USDC -> MATIC"]
        );
        assert!(cases.iter().all(|c| c.side == SwapSide::Sell));
        assert!(cases.iter().all(|c| c.contract_method == ContractMethod::SwapExactAmountIn));
        assert!(cases.iter().all(|c| c.transfer_fees.is_zero()));
        assert_eq!(cases[0].label(), "Polygon/SELL/swapExactAmountIn/USDC -> DAI");
    }

    #[test]
    fn test_amount_follows_side() {
        let registry = Registry::builtin();
        let scenario = quickswap().with_side_methods(
            SideMethods::sell([ContractMethod::SimpleSwap]).with(SwapSide::Buy, [ContractMethod::SimpleBuy]),
        );
        let cases = MatrixBuilder::new(&registry).expand(&scenario).unwrap();
        assert_eq!(cases.len(), 8);

        let a = U256::from(1_000_000_000u64);
        let b = U256::exp10(21);
        let native = U256::exp10(18);

        let sell: Vec<U256> = cases[..4].iter().map(|c| c.amount).collect();
        assert_eq!(sell, vec![a, b, native, a]);

        let buy: Vec<U256> = cases[4..].iter().map(|c| c.amount).collect();
        assert_eq!(buy, vec![b, a, a, native]);
    }

    #[test]
    fn test_holders_follow_source_token() {
        let registry = Registry::builtin();
        let cases = MatrixBuilder::new(&registry).expand(&quickswap()).unwrap();

        let usdc_holder = registry.holder(Network::Polygon, "USDC").unwrap();
        let dai_holder = registry.holder(Network::Polygon, "DAI").unwrap();
        let matic_holder = registry.holder(Network::Polygon, "MATIC").unwrap();

        let holders: Vec<Address> = cases.iter().map(|c| c.src_holder).collect();
        assert_eq!(holders, vec![usdc_holder, dai_holder, matic_holder, usdc_holder]);
    }

    #[test]
    fn test_buy_group_skipped_for_taxed_source() {
        let registry = Registry::builtin();
        let scenario = quickswap()
            .with_transfer_fees(TransferFeeParams::src_dex(1000))
            .with_side_methods(
                SideMethods::sell([ContractMethod::SwapExactAmountIn]).with(SwapSide::Buy, [ContractMethod::Buy]),
            );

        let groups = MatrixBuilder::new(&registry).expand_groups(&scenario).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].methods[0].cases.len(), 4);
        assert!(groups[1].methods[0].skipped);
        assert!(groups[1].methods[0].cases.is_empty());
    }

    #[test]
    fn test_expansion_is_repeatable() {
        let registry = Registry::builtin();
        let builder = MatrixBuilder::new(&registry);
        let scenario = quickswap().with_transfer_fees(TransferFeeParams::new(1, 2, 3, 4));
        assert_eq!(builder.expand(&scenario).unwrap(), builder.expand(&scenario).unwrap());
    }

    #[test]
    fn test_unknown_token_fails_whole_scenario() {
        let registry = Registry::builtin();
        let mut scenario = quickswap();
        scenario.token_b = "NOPE".to_string();

        let err = MatrixBuilder::new(&registry).expand(&scenario).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_side_methods_yield_nothing() {
        let registry = Registry::builtin();
        let scenario = quickswap().with_side_methods(SideMethods::new());
        assert!(MatrixBuilder::new(&registry).expand(&scenario).unwrap().is_empty());
    }
}
