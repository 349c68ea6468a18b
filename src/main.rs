use std::path::PathBuf;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use swap_matrix::blockchain::RpcProviderFactory;
use swap_matrix::catalog;
use swap_matrix::config::{self, MatrixConfig};
use swap_matrix::execution::HolderPreflightExecutor;
use swap_matrix::runner::{plan_suite, DEFAULT_CONCURRENCY};
use swap_matrix::{MatrixBuilder, MatrixError, MatrixRunner, Network, Registry, Result, SwapExecutor};

/// Swap test-matrix generator for DEX adapters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file (JSON); the built-in Algebra catalog is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only suites for this dex key
    #[arg(long, global = true)]
    dex: Option<String>,

    /// Only groups on this network (name or chain id)
    #[arg(long, global = true)]
    network: Option<Network>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the expanded matrix without touching any chain
    List {
        /// Emit cases as JSON
        #[arg(long)]
        json: bool,
    },
    /// Register and execute every case
    Run {
        /// RPC endpoint for one network as <network>=<url>, instead of
        /// HTTP_PROVIDER_<chainId>; repeat for several networks
        #[arg(short, long, value_parser = parse_rpc)]
        rpc: Vec<(Network, String)>,

        /// Cases executed at once
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,

        /// Skip the estimateGas transfer check
        #[arg(long)]
        no_transfer_check: bool,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_rpc(raw: &str) -> std::result::Result<(Network, String), String> {
    config::parse_rpc_override(raw).map_err(|e| e.to_string())
}

/// How a run ended, worst first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Some scenario could not be resolved or connected
    Misconfigured,
    /// Some case failed
    Failed,
    Passed,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "swap_matrix=debug" } else { "swap_matrix=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    config::load_env();

    // Exit code: 0 = all passed, 1 = failures, 3 = configuration error
    let code = match run(args).await {
        Ok(Outcome::Passed) => 0,
        Ok(Outcome::Failed) => 1,
        Ok(Outcome::Misconfigured) => 3,
        Err(e) => {
            eprintln!("❌ {}", e);
            3
        }
    };
    std::process::exit(code);
}

async fn run(args: Args) -> Result<Outcome> {
    let matrix = match &args.config {
        Some(path) => MatrixConfig::from_file(path)?,
        None => catalog::algebra(),
    }
    .filtered(args.dex.as_deref(), args.network);

    if matrix.suites.is_empty() {
        return Err(MatrixError::InvalidScenario("no suites match the filters".to_string()));
    }

    let mut registry = Registry::builtin();
    matrix.extend_registry(&mut registry);

    match args.command {
        Command::List { json } => list(&matrix, &registry, json),
        Command::Run { rpc, concurrency, no_transfer_check, json } => {
            let mut executor = HolderPreflightExecutor::new();
            if no_transfer_check {
                executor = executor.without_transfer_check();
            }
            let executor: Arc<dyn SwapExecutor> = Arc::new(executor);
            let providers = RpcProviderFactory::new(rpc.into_iter().collect());

            let plan = plan_suite(&matrix, &registry, &providers, executor).await;
            let report = MatrixRunner::new()
                .with_concurrency(concurrency)
                .run(&plan.root)
                .await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            for failure in &plan.failures {
                eprintln!("❌ {}", failure);
            }

            Ok(if !plan.is_complete() {
                Outcome::Misconfigured
            } else if report.all_passed() {
                Outcome::Passed
            } else {
                Outcome::Failed
            })
        }
    }
}

fn list(matrix: &MatrixConfig, registry: &Registry, json: bool) -> Result<Outcome> {
    let builder = MatrixBuilder::new(registry);
    let mut outcome = Outcome::Passed;

    if json {
        let mut cases = Vec::new();
        for labeled in matrix.scenarios() {
            match builder.expand(&labeled.scenario) {
                Ok(expanded) => cases.extend(expanded),
                Err(e) => {
                    eprintln!("❌ {} / {}: {}", labeled.dex_key, labeled.group, e);
                    outcome = Outcome::Misconfigured;
                }
            }
        }
        println!("{}", serde_json::to_string_pretty(&cases)?);
        return Ok(outcome);
    }

    println!("{}", matrix.name);
    for labeled in matrix.scenarios() {
        println!("  {} / {}", labeled.dex_key, labeled.group);
        let groups = match builder.expand_groups(&labeled.scenario) {
            Ok(groups) => groups,
            Err(e) => {
                println!("    ❌ {}", e);
                outcome = Outcome::Misconfigured;
                continue;
            }
        };
        for side_group in groups {
            for method_group in side_group.methods {
                if method_group.skipped {
                    println!("    {}/{} (skipped: taxed source)", side_group.side, method_group.contract_method);
                    continue;
                }
                for case in method_group.cases {
                    println!("    {}  amount={}  fees[{}]", case.label(), case.amount, case.transfer_fees);
                }
            }
        }
    }
    Ok(outcome)
}
