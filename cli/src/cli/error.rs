use std::fmt;

use zk_withdraw_client_sdk::{
    client::error::WalletError, external_api::contract::error::BlockchainError,
    utils::key::KeyError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    L1,
    L2,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::L1 => write!(f, "L1"),
            Layer::L2 => write!(f, "L2"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Config error: {0}")]
    ConfigError(#[from] KeyError),

    #[error("Failed to connect to {layer}: {source}")]
    ConnectionError {
        layer: Layer,
        #[source]
        source: BlockchainError,
    },

    #[error("Failed to query {what}: {source}")]
    QueryError {
        what: &'static str,
        #[source]
        source: BlockchainError,
    },

    #[error("Failed to create wallet: {0}")]
    WalletError(#[from] WalletError),

    #[error("Withdrawal failed: {0}")]
    TransactionError(BlockchainError),

    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}
