use std::fmt;

use alloy::primitives::Address;
use zk_withdraw_client_sdk::external_api::contract::opts::TransactOpts;

use crate::args::Args;

pub const DEFAULT_L2_ENDPOINT: &str = "http://127.0.0.1:3050";
pub const DEFAULT_L1_ENDPOINT: &str = "http://127.0.0.1:8545";
pub const DEFAULT_PRIVATE_KEY: &str = "0x0";

/// Settings for one withdrawal run. Built once from the command line.
#[derive(Clone, PartialEq, Eq)]
pub struct WithdrawConfig {
    pub l2_endpoint: String,
    pub l1_endpoint: String,
    pub private_key: String,
    pub amount: i64,
    pub to: Option<Address>,
    pub transact_opts: Option<TransactOpts>,
}

impl Default for WithdrawConfig {
    fn default() -> Self {
        Self {
            l2_endpoint: DEFAULT_L2_ENDPOINT.to_string(),
            l1_endpoint: DEFAULT_L1_ENDPOINT.to_string(),
            private_key: DEFAULT_PRIVATE_KEY.to_string(),
            amount: 0,
            to: None,
            transact_opts: None,
        }
    }
}

impl From<Args> for WithdrawConfig {
    fn from(args: Args) -> Self {
        let transact_opts = TransactOpts {
            nonce: args.nonce,
            gas_limit: args.gas_limit,
            max_fee_per_gas: args.max_fee_per_gas,
            max_priority_fee_per_gas: args.max_priority_fee_per_gas,
            chain_id: args.chain_id,
        };
        Self {
            l2_endpoint: args.l2_endpoint,
            l1_endpoint: args.l1_endpoint,
            private_key: args.private_key,
            amount: args.amount,
            to: args.to,
            transact_opts: (!transact_opts.is_empty()).then_some(transact_opts),
        }
    }
}

// keeps the private key out of logs
impl fmt::Debug for WithdrawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithdrawConfig")
            .field("l2_endpoint", &self.l2_endpoint)
            .field("l1_endpoint", &self.l1_endpoint)
            .field("private_key", &"<redacted>")
            .field("amount", &self.amount)
            .field("to", &self.to)
            .field("transact_opts", &self.transact_opts)
            .finish()
    }
}
