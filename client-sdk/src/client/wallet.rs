use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};

use crate::external_api::{
    contract::{
        erc20_contract::ERC20Contract,
        error::BlockchainError,
        l2_base_token_contract::{L2BaseTokenContract, L2_BASE_TOKEN_ADDRESS},
        l2_bridge_contract::L2BridgeContract,
        opts::{CallOpts, TransactOpts},
    },
    l1_client::L1Client,
    l2_client::L2Client,
};

use super::{
    error::WalletError,
    types::{is_base_token, WithdrawalReceipt, WithdrawalTransaction, ETH_ADDRESS},
};

const PRIVATE_KEY_LEN: usize = 32;

/// An account able to read its L1 balances and withdraw from L2 to L1.
/// Borrows both clients, so it can not outlive them.
#[derive(Debug)]
pub struct Wallet<'a> {
    signer: PrivateKeySigner,
    l2: &'a L2Client,
    l1: &'a L1Client,
}

impl<'a> Wallet<'a> {
    pub fn new(
        private_key: &[u8],
        l2: &'a L2Client,
        l1: &'a L1Client,
    ) -> Result<Self, WalletError> {
        if private_key.len() != PRIVATE_KEY_LEN {
            return Err(WalletError::InvalidPrivateKey(format!(
                "expected {PRIVATE_KEY_LEN} bytes, got {}",
                private_key.len()
            )));
        }
        let signer = PrivateKeySigner::from_slice(private_key)
            .map_err(|e| WalletError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signer, l2, l1 })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Balance of `token` on L1. `ETH_ADDRESS` selects the native asset,
    /// anything else is read as an ERC-20 contract.
    pub async fn balance_l1(
        &self,
        opts: Option<CallOpts>,
        token: Address,
    ) -> Result<U256, BlockchainError> {
        if token == ETH_ADDRESS {
            return self.l1.get_balance(self.address(), opts).await;
        }
        let contract = ERC20Contract::new(self.l1.provider().clone(), token);
        contract.balance_of(self.address(), opts).await
    }

    pub async fn withdraw(
        &self,
        opts: Option<TransactOpts>,
        tx: WithdrawalTransaction,
    ) -> Result<WithdrawalReceipt, BlockchainError> {
        let to = tx.to.unwrap_or_else(|| self.address());
        log::info!(
            "Withdrawing {} of token {:?} from {:?} to {:?}",
            tx.amount,
            tx.token,
            self.address(),
            to
        );
        let tx_hash = if is_base_token(tx.token) {
            let contract =
                L2BaseTokenContract::new(self.l2.provider().clone(), L2_BASE_TOKEN_ADDRESS);
            contract.withdraw(&self.signer, opts, to, tx.amount).await?
        } else {
            let bridges = self.l2.bridge_contracts().await?;
            let bridge = bridges
                .l2_default_bridge()
                .ok_or(BlockchainError::BridgeNotFound(tx.token))?;
            let contract = L2BridgeContract::new(self.l2.provider().clone(), bridge);
            contract
                .withdraw(&self.signer, opts, to, tx.token, tx.amount)
                .await?
        };
        Ok(WithdrawalReceipt { tx_hash })
    }
}
