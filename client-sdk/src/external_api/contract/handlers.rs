use alloy::{
    network::TransactionBuilder as _,
    primitives::{Address, B256},
    providers::Provider as _,
    rpc::types::TransactionRequest,
};

use super::{error::BlockchainError, opts::TransactOpts, utils::ProviderWithSigner};

/// Fills, signs and broadcasts `tx_request`. Returns as soon as the node has
/// accepted the raw transaction; the receipt is not awaited.
pub async fn send_transaction(
    signer: &ProviderWithSigner,
    from: Address,
    mut tx_request: TransactionRequest,
    opts: Option<TransactOpts>,
    tx_name: &str,
) -> Result<B256, BlockchainError> {
    tx_request.set_from(from);
    if let Some(opts) = opts {
        opts.apply(&mut tx_request);
    }
    match signer.send_transaction(tx_request).await {
        Ok(pending_tx) => {
            let tx_hash = *pending_tx.tx_hash();
            log::info!("{tx_name} tx hash: {tx_hash:?}");
            Ok(tx_hash)
        }
        Err(e) => {
            let error_message = e.to_string();
            log::error!("{tx_name} failed: {error_message}");
            if error_message.to_lowercase().contains("insufficient funds") {
                Err(BlockchainError::InsufficientFunds(format!(
                    "Insufficient funds for {tx_name} from {from:?}"
                )))
            } else {
                Err(BlockchainError::TransactionError(format!(
                    "Failed to send {tx_name}: {error_message}"
                )))
            }
        }
    }
}
