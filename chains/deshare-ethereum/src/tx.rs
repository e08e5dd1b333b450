use std::sync::Arc;
use std::time::Duration;

use ethers::abi::Detokenize;
use ethers::prelude::{Middleware, NameOrAddress};
use ethers::providers::PendingTransaction as EthersPendingTransaction;
use ethers_contract::builders::ContractCall;
use tracing::{error, info};

use deshare_core::{
    ChainCommunicationError, ChainResult, PendingTransaction, TransactionOverrides, TxOutcome,
    H256,
};

/// Apply the optional gas parameters of a send to a contract call
pub(crate) fn apply_overrides<M, D>(
    mut tx: ContractCall<M, D>,
    overrides: &TransactionOverrides,
) -> ContractCall<M, D>
where
    M: Middleware,
    D: Detokenize,
{
    if overrides.legacy {
        tx = tx.legacy();
    }
    if let Some(gas_limit) = overrides.gas_limit {
        tx = tx.gas(gas_limit);
    }
    if let Some(gas_price) = overrides.gas_price {
        tx = tx.gas_price(gas_price);
    }
    if let Some(value) = overrides.value {
        tx = tx.value(value);
    }
    tx
}

/// Dispatches a transaction, logs the tx id, and returns a handle resolving
/// once the receipt is in
pub(crate) async fn report_tx<M, D>(
    tx: ContractCall<M, D>,
    provider: Arc<M>,
    confirmation_timeout: Duration,
) -> ChainResult<PendingTransaction>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    // "0x..."
    let data = format!(
        "0x{}",
        hex::encode(tx.tx.data().map(|b| b.to_vec()).unwrap_or_default())
    );

    let to = tx
        .tx
        .to()
        .cloned()
        .unwrap_or_else(|| NameOrAddress::Address(Default::default()));

    info!(?to, %data, "Dispatching transaction");
    let tx_hash: H256 = {
        let dispatched = tx.send().await?;
        *dispatched
    };
    info!(?to, ?tx_hash, "Dispatched tx");

    Ok(PendingTransaction::new(
        tx_hash,
        wait_for_receipt(provider, tx_hash, confirmation_timeout),
    ))
}

async fn wait_for_receipt<M>(
    provider: Arc<M>,
    tx_hash: H256,
    confirmation_timeout: Duration,
) -> ChainResult<TxOutcome>
where
    M: Middleware + 'static,
{
    let pending = EthersPendingTransaction::new(tx_hash, provider.provider());

    match tokio::time::timeout(confirmation_timeout, pending).await {
        Ok(Ok(Some(receipt))) => {
            let outcome = TxOutcome::from(receipt);
            info!(?tx_hash, executed = outcome.executed, "confirmed transaction");
            Ok(outcome)
        }
        // ethers-rs will return None if it can no longer poll for the tx in the mempool
        Ok(Ok(None)) => Err(ChainCommunicationError::TransactionDropped(tx_hash)),
        Ok(Err(x)) => {
            error!(?tx_hash, error = ?x, "encountered error when waiting for receipt");
            Err(x.into())
        }
        Err(x) => {
            error!(?tx_hash, error = ?x, "waiting for receipt timed out");
            Err(ChainCommunicationError::TransactionTimeout())
        }
    }
}
