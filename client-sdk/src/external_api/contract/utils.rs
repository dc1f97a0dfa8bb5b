use alloy::{
    network::EthereumWallet,
    providers::{
        fillers::{
            ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, SimpleNonceManager,
            WalletFiller,
        },
        Identity, Provider as _, ProviderBuilder, RootProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::Url;

use super::error::BlockchainError;

pub type NormalProvider = FillProvider<
    JoinFill<
        JoinFill<JoinFill<Identity, GasFiller>, NonceFiller<SimpleNonceManager>>,
        ChainIdFiller,
    >,
    RootProvider,
>;

pub type ProviderWithSigner = FillProvider<
    JoinFill<
        JoinFill<
            JoinFill<JoinFill<Identity, GasFiller>, NonceFiller<SimpleNonceManager>>,
            ChainIdFiller,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider,
>;

pub fn parse_rpc_url(rpc_url: &str) -> Result<Url, BlockchainError> {
    let url = Url::parse(rpc_url.trim()).map_err(|e| BlockchainError::InvalidRpcUrl {
        url: rpc_url.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BlockchainError::InvalidRpcUrl {
            url: rpc_url.to_string(),
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(url)
}

/// HTTP transports are lazy, so this performs no network I/O.
pub fn get_provider(rpc_url: &str) -> Result<NormalProvider, BlockchainError> {
    let url = parse_rpc_url(rpc_url)?;
    let provider = ProviderBuilder::default()
        .with_gas_estimation()
        .with_simple_nonce_management()
        .fetch_chain_id()
        .connect_http(url);
    Ok(provider)
}

/// Wraps the transport of `provider` with the same fillers plus a signing wallet.
pub fn get_provider_with_signer(
    provider: &NormalProvider,
    signer: PrivateKeySigner,
) -> ProviderWithSigner {
    ProviderBuilder::default()
        .with_gas_estimation()
        .with_simple_nonce_management()
        .fetch_chain_id()
        .wallet(EthereumWallet::new(signer))
        .connect_provider(provider.root().clone())
}
