pub mod errors;

pub use errors::{MatrixError, Result};
