use alloy::{
    primitives::{address, Address, B256, U256},
    signers::local::PrivateKeySigner,
    sol,
};

use super::{
    error::BlockchainError,
    handlers::send_transaction,
    opts::TransactOpts,
    utils::{get_provider_with_signer, NormalProvider},
};

/// System contract holding the base token balances on L2.
pub const L2_BASE_TOKEN_ADDRESS: Address = address!("000000000000000000000000000000000000800a");

sol!(
    #[sol(rpc)]
    interface IL2BaseToken {
        function withdraw(address _l1Receiver) external payable;
    }
);

#[derive(Debug, Clone)]
pub struct L2BaseTokenContract {
    pub provider: NormalProvider,
    pub address: Address,
}

impl L2BaseTokenContract {
    pub fn new(provider: NormalProvider, address: Address) -> Self {
        Self { provider, address }
    }

    /// Burns `amount` of the base token on L2, to be released to
    /// `l1_receiver` once the batch is finalized on L1.
    pub async fn withdraw(
        &self,
        signer: &PrivateKeySigner,
        opts: Option<TransactOpts>,
        l1_receiver: Address,
        amount: U256,
    ) -> Result<B256, BlockchainError> {
        let signer_provider = get_provider_with_signer(&self.provider, signer.clone());
        let contract = IL2BaseToken::new(self.address, signer_provider.clone());
        let tx_request = contract
            .withdraw(l1_receiver)
            .value(amount)
            .into_transaction_request();
        send_transaction(
            &signer_provider,
            signer.address(),
            tx_request,
            opts,
            "withdraw",
        )
        .await
    }
}
