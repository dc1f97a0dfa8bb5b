use alloy::primitives::Address;
use clap::Parser;

use crate::config::{DEFAULT_L1_ENDPOINT, DEFAULT_L2_ENDPOINT, DEFAULT_PRIVATE_KEY};

#[derive(Parser, Debug)]
#[clap(name = "withdraw")]
#[clap(about = "Withdraw the native asset from a zkSync-style L2 back to L1")]
pub struct Args {
    /// L2 RPC endpoint
    #[clap(long, visible_alias = "rpc_l2", default_value = DEFAULT_L2_ENDPOINT)]
    pub l2_endpoint: String,

    /// L1 RPC endpoint
    #[clap(long, visible_alias = "rpc_l1", default_value = DEFAULT_L1_ENDPOINT)]
    pub l1_endpoint: String,

    /// Hex private key of the withdrawing account
    #[clap(long, visible_alias = "pv", default_value = DEFAULT_PRIVATE_KEY)]
    pub private_key: String,

    /// Amount to withdraw, in the smallest unit
    #[clap(short = 'a', long, default_value_t = 0, allow_negative_numbers = true)]
    pub amount: i64,

    /// L1 receiver, defaults to the withdrawing account
    #[clap(long)]
    pub to: Option<Address>,

    #[clap(long, help_heading = "Transaction overrides")]
    pub nonce: Option<u64>,
    #[clap(long, help_heading = "Transaction overrides")]
    pub gas_limit: Option<u64>,
    #[clap(long, help_heading = "Transaction overrides")]
    pub max_fee_per_gas: Option<u128>,
    #[clap(long, help_heading = "Transaction overrides")]
    pub max_priority_fee_per_gas: Option<u128>,
    #[clap(long, help_heading = "Transaction overrides")]
    pub chain_id: Option<u64>,
}

/// Long flags that may also be written with a single dash (`-rpc_l2=...`).
const SINGLE_DASH_LONG_FLAGS: [&str; 4] = ["rpc_l2", "rpc_l1", "pv", "help"];

/// Rewrites `-rpc_l2`, `-rpc_l1`, `-pv` and `-help` (with or without
/// `=value`) to their `--` form so clap does not read them as short flag
/// clusters. Everything else is passed through untouched.
pub fn normalize_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let is_single_dash_long = arg
                .strip_prefix('-')
                .filter(|flag| !flag.starts_with('-'))
                .map(|flag| flag.split_once('=').map_or(flag, |(name, _)| name))
                .is_some_and(|name| SINGLE_DASH_LONG_FLAGS.contains(&name));
            if is_single_dash_long {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}
