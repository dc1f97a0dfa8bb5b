use alloy::{
    primitives::{Address, U256},
    providers::Provider as _,
};

use super::contract::{
    error::BlockchainError,
    opts::CallOpts,
    utils::{get_provider, NormalProvider},
};

/// Handle to the L1 (Ethereum) JSON-RPC endpoint. Released on drop.
#[derive(Debug)]
pub struct L1Client {
    endpoint: String,
    provider: NormalProvider,
}

impl L1Client {
    pub fn connect(endpoint: &str) -> Result<Self, BlockchainError> {
        let provider = get_provider(endpoint)?;
        log::debug!("Opened L1 client for {endpoint}");
        Ok(Self::from_provider(endpoint, provider))
    }

    pub fn from_provider(endpoint: &str, provider: NormalProvider) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            provider,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn provider(&self) -> &NormalProvider {
        &self.provider
    }

    pub async fn get_balance(
        &self,
        address: Address,
        opts: Option<CallOpts>,
    ) -> Result<U256, BlockchainError> {
        let mut request = self.provider.get_balance(address);
        if let Some(block) = opts.and_then(|opts| opts.block) {
            request = request.block_id(block);
        }
        let balance = request.await?;
        Ok(balance)
    }
}

impl Drop for L1Client {
    fn drop(&mut self) {
        log::debug!("Closing L1 client for {}", self.endpoint);
    }
}
