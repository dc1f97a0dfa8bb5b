use alloy::{
    network::TransactionBuilder as _,
    rpc::types::{BlockId, TransactionRequest},
};

/// Explicit overrides for a state-changing call. Fields left as `None` are
/// filled by the provider (nonce, gas estimation, chain id).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactOpts {
    pub nonce: Option<u64>,
    pub gas_limit: Option<u64>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    pub chain_id: Option<u64>,
}

impl TransactOpts {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, tx_request: &mut TransactionRequest) {
        if let Some(nonce) = self.nonce {
            tx_request.set_nonce(nonce);
        }
        if let Some(gas_limit) = self.gas_limit {
            tx_request.set_gas_limit(gas_limit);
        }
        if let Some(max_fee_per_gas) = self.max_fee_per_gas {
            tx_request.set_max_fee_per_gas(max_fee_per_gas);
        }
        if let Some(max_priority_fee_per_gas) = self.max_priority_fee_per_gas {
            tx_request.set_max_priority_fee_per_gas(max_priority_fee_per_gas);
        }
        if let Some(chain_id) = self.chain_id {
            tx_request.set_chain_id(chain_id);
        }
    }
}

/// Options for read-only queries. `block: None` means latest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOpts {
    pub block: Option<BlockId>,
}
