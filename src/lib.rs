pub mod contracts;
pub mod registry;
pub mod matrix;
pub mod execution;
pub mod runner;
pub mod catalog;
pub mod config;

pub mod core;
pub mod models;
pub mod blockchain;
pub mod utils;

pub use crate::core::{CaseRegistrar, RegisteredCase, Suite, SuiteNode, SwapExecutor};
pub use matrix::{is_untestable_combination, MatrixBuilder, Scenario, SideMethods};
pub use models::{ContractMethod, Network, SwapSide, TestCase, Token, TransferFeeParams};
pub use registry::{AssetRegistry, Registry};
pub use runner::{MatrixRunner, SuiteReport};
pub use utils::{MatrixError, Result};
