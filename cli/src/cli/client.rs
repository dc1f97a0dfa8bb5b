use zk_withdraw_client_sdk::external_api::{l1_client::L1Client, l2_client::L2Client};

use crate::config::WithdrawConfig;

use super::error::{CliError, Layer};

/// Opens L2 first, then L1. If L1 fails the L2 client is dropped on return.
pub fn open_clients(config: &WithdrawConfig) -> Result<(L2Client, L1Client), CliError> {
    let l2 = L2Client::connect(&config.l2_endpoint).map_err(|source| {
        CliError::ConnectionError {
            layer: Layer::L2,
            source,
        }
    })?;
    let l1 = L1Client::connect(&config.l1_endpoint).map_err(|source| {
        CliError::ConnectionError {
            layer: Layer::L1,
            source,
        }
    })?;
    Ok((l2, l1))
}
