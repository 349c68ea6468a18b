pub mod traits;
pub mod request;
pub mod suite;

pub use traits::{CaseRegistrar, ProviderFactory, SwapExecutor};
pub use request::ExecutionRequest;
pub use suite::{RegisteredCase, Suite, SuiteNode};
