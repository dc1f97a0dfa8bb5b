use alloy::{
    primitives::{Address, B256, U256},
    signers::local::PrivateKeySigner,
    sol,
};

use super::{
    error::BlockchainError,
    handlers::send_transaction,
    opts::TransactOpts,
    utils::{get_provider_with_signer, NormalProvider},
};

sol!(
    #[sol(rpc)]
    interface IL2Bridge {
        function withdraw(address _l1Receiver, address _l2Token, uint256 _amount) external;
    }
);

#[derive(Debug, Clone)]
pub struct L2BridgeContract {
    pub provider: NormalProvider,
    pub address: Address,
}

impl L2BridgeContract {
    pub fn new(provider: NormalProvider, address: Address) -> Self {
        Self { provider, address }
    }

    pub async fn withdraw(
        &self,
        signer: &PrivateKeySigner,
        opts: Option<TransactOpts>,
        l1_receiver: Address,
        l2_token: Address,
        amount: U256,
    ) -> Result<B256, BlockchainError> {
        let signer_provider = get_provider_with_signer(&self.provider, signer.clone());
        let contract = IL2Bridge::new(self.address, signer_provider.clone());
        let tx_request = contract
            .withdraw(l1_receiver, l2_token, amount)
            .into_transaction_request();
        send_transaction(
            &signer_provider,
            signer.address(),
            tx_request,
            opts,
            "bridge withdraw",
        )
        .await
    }
}
