use alloy::{contract::Error as ContractError, primitives::Address, transports::TransportError};

#[derive(Debug, thiserror::Error)]
pub enum BlockchainError {
    #[error("Invalid RPC URL {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("RPC error: {0}")]
    RPCError(#[from] TransportError),

    #[error("Contract error: {0}")]
    ContractError(#[from] ContractError),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No L2 bridge found for token {0}")]
    BridgeNotFound(Address),
}
