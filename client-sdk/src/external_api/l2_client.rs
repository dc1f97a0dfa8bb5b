use alloy::{primitives::Address, providers::Provider as _};
use serde::{Deserialize, Serialize};

use super::contract::{
    error::BlockchainError,
    utils::{get_provider, NormalProvider},
};

/// Bridge addresses as reported by `zks_getBridgeContracts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeContracts {
    pub l1_erc20_default_bridge: Option<Address>,
    pub l2_erc20_default_bridge: Option<Address>,
    pub l1_weth_bridge: Option<Address>,
    pub l2_weth_bridge: Option<Address>,
    pub l1_shared_default_bridge: Option<Address>,
    pub l2_shared_default_bridge: Option<Address>,
}

impl BridgeContracts {
    /// The bridge ERC-20 withdrawals go through: the shared bridge when the
    /// chain has one, otherwise the legacy ERC-20 bridge.
    pub fn l2_default_bridge(&self) -> Option<Address> {
        let non_zero = |address: &Address| !address.is_zero();
        self.l2_shared_default_bridge
            .filter(non_zero)
            .or(self.l2_erc20_default_bridge.filter(non_zero))
    }
}

/// Handle to the L2 (zkSync) JSON-RPC endpoint. Released on drop.
#[derive(Debug)]
pub struct L2Client {
    endpoint: String,
    provider: NormalProvider,
}

impl L2Client {
    pub fn connect(endpoint: &str) -> Result<Self, BlockchainError> {
        let provider = get_provider(endpoint)?;
        log::debug!("Opened L2 client for {endpoint}");
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

    pub async fn block_number(&self) -> Result<u64, BlockchainError> {
        let block_number = self.provider.get_block_number().await?;
        Ok(block_number)
    }

    pub async fn bridge_contracts(&self) -> Result<BridgeContracts, BlockchainError> {
        let bridges = self
            .provider
            .raw_request::<_, BridgeContracts>("zks_getBridgeContracts".into(), ())
            .await?;
        Ok(bridges)
    }
}

impl Drop for L2Client {
    fn drop(&mut self) {
        log::debug!("Closing L2 client for {}", self.endpoint);
    }
}
