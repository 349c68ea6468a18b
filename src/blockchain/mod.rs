pub mod client;

pub use client::{ProviderHandle, RpcProviderFactory};
