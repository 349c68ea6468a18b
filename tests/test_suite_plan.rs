use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use swap_matrix::blockchain::ProviderHandle;
use swap_matrix::config::MatrixConfig;
use swap_matrix::core::{ExecutionRequest, ProviderFactory};
use swap_matrix::runner::plan_suite;
use swap_matrix::{MatrixError, MatrixRunner, Network, Registry, Result, SwapExecutor};

const CONFIG: &str = r#"{
  "name": "Algebra",
  "suites": [
    {
      "dexKey": "QuickSwapV3",
      "groups": [
        {
          "label": "Polygon_V6",
          "network": "Polygon",
          "tokenA": "USDC", "tokenB": "DAI",
          "amountA": "1000000000",
          "amountB": "1000000000000000000000",
          "nativeAmount": "1000000000000000000"
        },
        {
          "label": "Polygon_unknown",
          "network": "Polygon",
          "tokenA": "NOPE", "tokenB": "DAI",
          "amountA": "1000000000",
          "amountB": "1000000000000000000000",
          "nativeAmount": "1000000000000000000"
        }
      ]
    },
    {
      "dexKey": "ZyberSwapV3",
      "groups": [
        {
          "label": "Arbitrum_V6",
          "network": "Arbitrum",
          "tokenA": "USDC", "tokenB": "DAI",
          "amountA": "1000000000",
          "amountB": "1000000000000000000000",
          "nativeAmount": "1000000000000000000"
        }
      ]
    }
  ]
}"#;

/// Hands out offline providers, refusing the networks it was told are down
struct StubProviders {
    down: Vec<Network>,
    created: Mutex<Vec<Network>>,
}

impl StubProviders {
    fn with_down(down: &[Network]) -> Self {
        Self { down: down.to_vec(), created: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl ProviderFactory for StubProviders {
    async fn create(&self, network: Network) -> Result<ProviderHandle> {
        self.created.lock().unwrap().push(network);
        if self.down.contains(&network) {
            return Err(MatrixError::MissingRpcEndpoint {
                network: network.name().to_string(),
                var: format!("HTTP_PROVIDER_{}", network.chain_id()),
            });
        }
        ProviderHandle::new("http://127.0.0.1:8545", network)
    }
}

struct PassingExecutor;

#[async_trait]
impl SwapExecutor for PassingExecutor {
    fn name(&self) -> &'static str {
        "passing"
    }

    async fn execute(&self, _request: &ExecutionRequest) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_unknown_symbol_drops_only_its_scenario() {
    let matrix = MatrixConfig::from_json_str(CONFIG).unwrap();
    let registry = Registry::builtin();
    let providers = StubProviders::with_down(&[]);

    let plan = plan_suite(&matrix, &registry, &providers, Arc::new(PassingExecutor)).await;

    assert!(!plan.is_complete());
    assert_eq!(plan.failures.len(), 1);
    assert_eq!(plan.failures[0].group, "Polygon_unknown");
    assert!(matches!(plan.failures[0].error, MatrixError::UnknownToken { .. }));
    assert!(plan.root.find(&["QuickSwapV3", "Polygon_V6", "Polygon"]).is_some());
    assert!(plan.root.find(&["QuickSwapV3", "Polygon_unknown"]).is_none());
    assert_eq!(plan.root.case_count(), 8);

    // no provider was requested for the unresolvable group
    assert_eq!(providers.created.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unreachable_network_still_runs_the_others() {
    let matrix = MatrixConfig::from_json_str(CONFIG).unwrap();
    let registry = Registry::builtin();
    let providers = StubProviders::with_down(&[Network::Arbitrum]);

    let plan = plan_suite(&matrix, &registry, &providers, Arc::new(PassingExecutor)).await;

    assert_eq!(plan.failures.len(), 2);
    let failed: Vec<_> = plan.failures.iter().map(|f| f.dex_key.as_str()).collect();
    assert!(failed.contains(&"ZyberSwapV3"));
    assert!(plan.failures.iter().any(|f| f.error.is_configuration()));
    assert!(plan.root.find(&["ZyberSwapV3"]).is_none());

    let report = MatrixRunner::new().run(&plan.root).await;
    assert_eq!(report.total(), 4);
    assert!(report.all_passed());
    assert!(report.outcomes.iter().all(|o| o.path[1] == "QuickSwapV3"));
}

#[tokio::test]
async fn test_every_scenario_failing_leaves_an_empty_suite() {
    let matrix = MatrixConfig::from_json_str(CONFIG).unwrap();
    let registry = Registry::builtin();
    let providers = StubProviders::with_down(&[Network::Polygon, Network::Arbitrum]);

    let plan = plan_suite(&matrix, &registry, &providers, Arc::new(PassingExecutor)).await;

    assert_eq!(plan.failures.len(), 3);
    assert_eq!(plan.root.case_count(), 0);
    let report = MatrixRunner::new().run(&plan.root).await;
    assert_eq!(report.total(), 0);
}
