use alloy::primitives::U256;
use zk_withdraw_client_sdk::external_api::contract::error::BlockchainError;

/// Transaction values are unsigned, so a negative amount is rejected here
/// rather than at argument parsing.
pub fn amount_to_u256(amount: i64) -> Result<U256, BlockchainError> {
    u64::try_from(amount)
        .map(U256::from)
        .map_err(|_| BlockchainError::InvalidAmount(format!("{amount} is negative")))
}
