//! ERC20 bindings used to check holder balances before a swap
use ethers::prelude::*;

abigen!(
    IERC20,
    r#"[
        function balanceOf(address account) external view returns (uint256)
        function transfer(address to, uint256 amount) external returns (bool)
    ]"#,
);
