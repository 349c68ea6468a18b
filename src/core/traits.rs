use async_trait::async_trait;
use crate::blockchain::ProviderHandle;
use crate::core::{ExecutionRequest, RegisteredCase};
use crate::models::Network;
use crate::utils::Result;

/// Creates the read-only provider shared by one scenario's cases
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    async fn create(&self, network: Network) -> Result<ProviderHandle>;
}

/// Core abstraction: anything that can run one swap case against a chain
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    /// Unique identifier for this executor
    fn name(&self) -> &'static str;

    /// Submit the swap and validate it. Errors fail this case only.
    async fn execute(&self, request: &ExecutionRequest) -> Result<()>;
}

/// Tree-shaped case registration: `describe` opens a named group,
/// `it` adds one executable case to the innermost open group.
pub trait CaseRegistrar {
    fn describe<F>(&mut self, name: &str, body: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self);

    fn it(&mut self, case: RegisteredCase);
}
