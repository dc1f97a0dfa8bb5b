pub mod erc20_contract;
pub mod error;
pub mod handlers;
pub mod l2_base_token_contract;
pub mod l2_bridge_contract;
pub mod opts;
pub mod utils;
