use alloy::{
    primitives::{Address, U256},
    sol,
};

use super::{error::BlockchainError, opts::CallOpts, utils::NormalProvider};

sol!(
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
    }
);

#[derive(Debug, Clone)]
pub struct ERC20Contract {
    pub provider: NormalProvider,
    pub address: Address,
}

impl ERC20Contract {
    pub fn new(provider: NormalProvider, address: Address) -> Self {
        Self { provider, address }
    }

    pub async fn balance_of(
        &self,
        account: Address,
        opts: Option<CallOpts>,
    ) -> Result<U256, BlockchainError> {
        let contract = IERC20::new(self.address, self.provider.clone());
        let mut call = contract.balanceOf(account);
        if let Some(block) = opts.and_then(|opts| opts.block) {
            call = call.block(block);
        }
        let balance = call.call().await?;
        Ok(balance)
    }
}
