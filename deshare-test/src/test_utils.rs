use std::time::Duration;

use deshare_core::*;

/// A mined transaction with the given status
pub fn outcome(txid: H256, executed: bool) -> TxOutcome {
    TxOutcome {
        txid,
        executed,
        gas_used: U256::from(21_000u64),
        gas_price: U256::from(20_000_000_000u64),
    }
}

/// A broadcast transaction that is mined right away with the given status
pub fn mined(txid: H256, executed: bool) -> PendingTransaction {
    PendingTransaction::new(txid, async move { Ok(outcome(txid, executed)) })
}

/// A broadcast transaction that is mined after `delay`
pub fn mined_after(txid: H256, delay: Duration) -> PendingTransaction {
    PendingTransaction::new(txid, async move {
        tokio::time::sleep(delay).await;
        Ok(outcome(txid, true))
    })
}

/// A broadcast transaction whose confirmation wait times out
pub fn timed_out(txid: H256) -> PendingTransaction {
    PendingTransaction::new(txid, async { Err(ChainCommunicationError::TransactionTimeout()) })
}

/// `n` distinct fund addresses
pub fn fund_addresses(n: u8) -> Vec<H160> {
    (1..=n).map(H160::repeat_byte).collect()
}
