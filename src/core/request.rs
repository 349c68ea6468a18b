use std::sync::Arc;
use crate::blockchain::ProviderHandle;
use crate::models::TestCase;

/// Everything an executor receives for one case
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub case: TestCase,
    pub provider: Arc<ProviderHandle>,
}

impl ExecutionRequest {
    pub fn new(case: TestCase, provider: Arc<ProviderHandle>) -> Self {
        Self { case, provider }
    }
}
