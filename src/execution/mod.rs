//! Swap executors
//!
//! The real adapter call lives outside this crate. `HolderPreflightExecutor`
//! checks on a live or forked chain that a case is fundable before the
//! adapter would be invoked.

mod preflight;

pub use preflight::HolderPreflightExecutor;
