pub mod network;
pub mod side;
pub mod method;
pub mod fees;
pub mod token;
pub mod case;

pub use network::Network;
pub use side::SwapSide;
pub use method::ContractMethod;
pub use fees::TransferFeeParams;
pub use token::{native_token_address, Token, NATIVE_TOKEN_ADDRESS};
pub use case::TestCase;
