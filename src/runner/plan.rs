//! Turns a scenario file into a registered suite
//!
//! Each scenario is resolved and given its provider on its own. A lookup
//! or connection failure drops that scenario and is reported; the others
//! are still registered.

use std::sync::Arc;
use crate::blockchain::ProviderHandle;
use crate::config::{LabeledScenario, MatrixConfig};
use crate::core::{CaseRegistrar, ProviderFactory, Suite, SuiteNode, SwapExecutor};
use crate::matrix::MatrixBuilder;
use crate::registry::AssetRegistry;
use crate::utils::MatrixError;

/// A scenario that never reached registration
#[derive(Debug)]
pub struct ScenarioFailure {
    pub dex_key: String,
    pub group: String,
    pub error: MatrixError,
}

impl std::fmt::Display for ScenarioFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}: {}", self.dex_key, self.group, self.error)
    }
}

#[derive(Debug)]
pub struct SuitePlan {
    pub root: SuiteNode,
    pub failures: Vec<ScenarioFailure>,
}

impl SuitePlan {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn failure(labeled: &LabeledScenario, error: MatrixError) -> ScenarioFailure {
    tracing::warn!("Dropping {} / {}: {}", labeled.dex_key, labeled.group, error);
    ScenarioFailure {
        dex_key: labeled.dex_key.clone(),
        group: labeled.group.clone(),
        error,
    }
}

/// Register every scenario as `name > dex > group > network > side > method > case`,
/// with one provider per scenario.
pub async fn plan_suite(
    matrix: &MatrixConfig,
    registry: &dyn AssetRegistry,
    providers: &dyn ProviderFactory,
    executor: Arc<dyn SwapExecutor>,
) -> SuitePlan {
    let builder = MatrixBuilder::new(registry);
    let mut failures = Vec::new();
    let mut ready: Vec<(LabeledScenario, Arc<ProviderHandle>)> = Vec::new();

    for labeled in matrix.scenarios() {
        // resolve before connecting so a bad symbol costs no RPC
        if let Err(e) = builder.expand(&labeled.scenario) {
            failures.push(failure(&labeled, e));
            continue;
        }
        match providers.create(labeled.scenario.network).await {
            Ok(provider) => ready.push((labeled, Arc::new(provider))),
            Err(e) => failures.push(failure(&labeled, e)),
        }
    }

    let mut suite = Suite::new(matrix.name.clone());
    for suite_def in &matrix.suites {
        if !ready.iter().any(|(l, _)| l.dex_key == suite_def.dex_key) {
            continue;
        }
        suite.describe(&suite_def.dex_key, |s| {
            for (labeled, provider) in ready.iter().filter(|(l, _)| l.dex_key == suite_def.dex_key) {
                s.describe(&labeled.group, |s| {
                    if let Err(e) = builder.register(&labeled.scenario, provider.clone(), executor.clone(), s) {
                        failures.push(failure(labeled, e));
                    }
                });
            }
        });
    }

    SuitePlan {
        root: suite.finish(),
        failures,
    }
}
