use alloy::primitives::{Address, B256, U256};

use crate::external_api::contract::l2_base_token_contract::L2_BASE_TOKEN_ADDRESS;

/// Sentinel for the chain's native asset.
pub const ETH_ADDRESS: Address = Address::ZERO;

pub fn is_base_token(token: Address) -> bool {
    token == ETH_ADDRESS || token == L2_BASE_TOKEN_ADDRESS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalTransaction {
    /// L1 receiver, the sender's own address when `None`.
    pub to: Option<Address>,
    pub amount: U256,
    pub token: Address,
}

impl WithdrawalTransaction {
    pub fn native(amount: U256) -> Self {
        Self {
            to: None,
            amount,
            token: ETH_ADDRESS,
        }
    }

    pub fn with_to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    pub tx_hash: B256,
}
