use std::io::Write;

use alloy::primitives::U256;
use zk_withdraw_client_sdk::{
    client::{
        types::{WithdrawalReceipt, WithdrawalTransaction, ETH_ADDRESS},
        wallet::Wallet,
    },
    external_api::{l1_client::L1Client, l2_client::L2Client},
    utils::key::hex_to_bytes,
};

use crate::{config::WithdrawConfig, format::amount_to_u256};

use super::{client::open_clients, error::CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalOutcome {
    pub block_number: u64,
    pub balance_l1: U256,
    pub receipt: WithdrawalReceipt,
}

/// Opens both clients and performs one withdrawal. The clients are dropped
/// before returning, whatever the outcome.
pub async fn run<W: Write>(
    config: &WithdrawConfig,
    out: &mut W,
) -> Result<WithdrawalOutcome, CliError> {
    let (l2, l1) = open_clients(config)?;
    send_withdrawal(config, &l2, &l1, out).await
}

/// Prints the L2 block number, the L1 balance and the withdrawal tx hash to
/// `out`, stopping at the first failure.
pub async fn send_withdrawal<W: Write>(
    config: &WithdrawConfig,
    l2: &L2Client,
    l1: &L1Client,
    out: &mut W,
) -> Result<WithdrawalOutcome, CliError> {
    let block_number = l2
        .block_number()
        .await
        .map_err(|source| CliError::QueryError {
            what: "L2 block number",
            source,
        })?;
    writeln!(out, "Block number: {block_number}")?;

    let private_key = hex_to_bytes(&config.private_key)?;
    let wallet = Wallet::new(&private_key, l2, l1)?;
    log::info!("Wallet address: {:?}", wallet.address());

    let balance_l1 = wallet
        .balance_l1(None, ETH_ADDRESS)
        .await
        .map_err(|source| CliError::QueryError {
            what: "L1 balance",
            source,
        })?;
    writeln!(out, "Balance L1: {balance_l1}")?;

    let amount = amount_to_u256(config.amount).map_err(CliError::TransactionError)?;
    let tx = WithdrawalTransaction::native(amount).with_to(config.to.unwrap_or(wallet.address()));
    let receipt = wallet
        .withdraw(config.transact_opts, tx)
        .await
        .map_err(CliError::TransactionError)?;
    writeln!(out, "Withdraw transaction: {}", receipt.tx_hash)?;

    Ok(WithdrawalOutcome {
        block_number,
        balance_l1,
        receipt,
    })
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, B256, U64},
        providers::{mock::Asserter, ProviderBuilder},
    };
    use zk_withdraw_client_sdk::{
        client::error::WalletError,
        external_api::contract::{error::BlockchainError, opts::TransactOpts},
        utils::key::KeyError,
    };

    use crate::cli::error::Layer;

    use super::*;

    const PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn get_mocked_clients() -> (L2Client, Asserter, L1Client, Asserter) {
        let l2_asserter = Asserter::new();
        let l2_provider = ProviderBuilder::default()
            .with_gas_estimation()
            .with_simple_nonce_management()
            .fetch_chain_id()
            .connect_mocked_client(l2_asserter.clone());
        let l1_asserter = Asserter::new();
        let l1_provider = ProviderBuilder::default()
            .with_gas_estimation()
            .with_simple_nonce_management()
            .fetch_chain_id()
            .connect_mocked_client(l1_asserter.clone());
        (
            L2Client::from_provider("mock://l2", l2_provider),
            l2_asserter,
            L1Client::from_provider("mock://l1", l1_provider),
            l1_asserter,
        )
    }

    fn get_config(amount: i64) -> WithdrawConfig {
        WithdrawConfig {
            private_key: PRIVATE_KEY.to_string(),
            amount,
            transact_opts: Some(TransactOpts {
                nonce: Some(0),
                gas_limit: Some(500_000),
                max_fee_per_gas: Some(250_000_000),
                max_priority_fee_per_gas: Some(0),
                chain_id: Some(270),
            }),
            ..Default::default()
        }
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_send_withdrawal() -> anyhow::Result<()> {
        let (l2, l2_asserter, l1, l1_asserter) = get_mocked_clients();
        let tx_hash = B256::repeat_byte(0x11);
        l2_asserter.push_success(&U64::from(4096));
        l1_asserter.push_success(&U256::from(2_000_000_000_000_000_000u128));
        l2_asserter.push_success(&tx_hash);

        let mut out = Vec::new();
        let config = get_config(1_000_000_000_000_000_000);
        let outcome = send_withdrawal(&config, &l2, &l1, &mut out).await?;

        assert_eq!(outcome.block_number, 4096);
        assert_eq!(outcome.receipt.tx_hash, tx_hash);
        assert_eq!(
            lines(&out),
            vec![
                "Block number: 4096".to_string(),
                "Balance L1: 2000000000000000000".to_string(),
                format!("Withdraw transaction: {tx_hash}"),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_rerun_sends_new_transaction() -> anyhow::Result<()> {
        let (l2, l2_asserter, l1, l1_asserter) = get_mocked_clients();
        let config = WithdrawConfig {
            to: Some(address!("1111111111111111111111111111111111111111")),
            ..get_config(1)
        };
        let mut hashes = Vec::new();
        for byte in [0x01, 0x02] {
            l2_asserter.push_success(&U64::from(1));
            l1_asserter.push_success(&U256::from(10));
            l2_asserter.push_success(&B256::repeat_byte(byte));
            let outcome = send_withdrawal(&config, &l2, &l1, &mut Vec::new()).await?;
            hashes.push(outcome.receipt.tx_hash);
        }
        assert_ne!(hashes[0], hashes[1]);
        Ok(())
    }

    #[tokio::test]
    async fn test_block_number_failure_stops_everything() {
        let (l2, l2_asserter, l1, _) = get_mocked_clients();
        l2_asserter.push_failure_msg("connection refused");

        let mut out = Vec::new();
        let err = send_withdrawal(&get_config(1), &l2, &l1, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::QueryError {
                what: "L2 block number",
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_private_key() {
        let (l2, l2_asserter, l1, _) = get_mocked_clients();
        l2_asserter.push_success(&U64::from(7));

        let mut out = Vec::new();
        let config = WithdrawConfig {
            private_key: "0x0".to_string(),
            ..get_config(1)
        };
        let err = send_withdrawal(&config, &l2, &l1, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::ConfigError(KeyError::InvalidHex(_))
        ));
        assert_eq!(lines(&out), vec!["Block number: 7".to_string()]);
    }

    #[tokio::test]
    async fn test_short_private_key() {
        let (l2, l2_asserter, l1, _) = get_mocked_clients();
        l2_asserter.push_success(&U64::from(7));

        let config = WithdrawConfig {
            private_key: "0xdeadbeef".to_string(),
            ..get_config(1)
        };
        let err = send_withdrawal(&config, &l2, &l1, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::WalletError(WalletError::InvalidPrivateKey(_))
        ));
    }

    #[tokio::test]
    async fn test_balance_failure() {
        let (l2, l2_asserter, l1, l1_asserter) = get_mocked_clients();
        l2_asserter.push_success(&U64::from(7));
        l1_asserter.push_failure_msg("upstream unavailable");

        let mut out = Vec::new();
        let err = send_withdrawal(&get_config(1), &l2, &l1, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::QueryError {
                what: "L1 balance",
                ..
            }
        ));
        assert_eq!(lines(&out).len(), 1);
    }

    #[tokio::test]
    async fn test_negative_amount() {
        let (l2, l2_asserter, l1, l1_asserter) = get_mocked_clients();
        l2_asserter.push_success(&U64::from(7));
        l1_asserter.push_success(&U256::from(10));

        let mut out = Vec::new();
        let err = send_withdrawal(&get_config(-5), &l2, &l1, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::TransactionError(BlockchainError::InvalidAmount(_))
        ));
        assert_eq!(
            lines(&out),
            vec![
                "Block number: 7".to_string(),
                "Balance L1: 10".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_withdraw_rejected() {
        let (l2, l2_asserter, l1, l1_asserter) = get_mocked_clients();
        l2_asserter.push_success(&U64::from(7));
        l1_asserter.push_success(&U256::from(10));
        l2_asserter.push_failure_msg("insufficient funds for gas * price + value");

        let err = send_withdrawal(&get_config(1_000), &l2, &l1, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::TransactionError(BlockchainError::InsufficientFunds(_))
        ));
    }

    #[tokio::test]
    async fn test_run_with_invalid_l2_endpoint() {
        let config = WithdrawConfig {
            l2_endpoint: "localhost:3050".to_string(),
            ..get_config(1)
        };
        let mut out = Vec::new();
        let err = run(&config, &mut out).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::ConnectionError {
                layer: Layer::L2,
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_with_invalid_l1_endpoint() {
        let config = WithdrawConfig {
            l2_endpoint: "http://127.0.0.1:1".to_string(),
            l1_endpoint: "ws://127.0.0.1:8546".to_string(),
            ..get_config(1)
        };
        let mut out = Vec::new();
        let err = run(&config, &mut out).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::ConnectionError {
                layer: Layer::L1,
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_with_unreachable_l2_node() {
        // valid URLs, nothing listens on port 1
        let config = WithdrawConfig {
            l2_endpoint: "http://127.0.0.1:1".to_string(),
            l1_endpoint: "http://127.0.0.1:1".to_string(),
            ..get_config(1)
        };
        let mut out = Vec::new();
        let err = run(&config, &mut out).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::QueryError {
                what: "L2 block number",
                ..
            }
        ));
        assert!(out.is_empty());
    }
}
