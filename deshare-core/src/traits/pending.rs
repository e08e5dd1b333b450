use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::{ChainResult, TxOutcome, H256};

/// A state-mutating call that has been broadcast and is waiting to be mined.
///
/// Holding one of these is the `submitted` stage of a send: the hash is known
/// and a block explorer can show it. Awaiting [`PendingTransaction::confirmed`]
/// yields the single terminal stage, either the receipt outcome or the error
/// that ended the wait. Consuming `self` keeps that stage exactly-once.
pub struct PendingTransaction {
    tx_hash: H256,
    confirmation: BoxFuture<'static, ChainResult<TxOutcome>>,
}

impl PendingTransaction {
    /// Wrap a broadcast transaction and the future resolving its receipt.
    pub fn new<F>(tx_hash: H256, confirmation: F) -> Self
    where
        F: Future<Output = ChainResult<TxOutcome>> + Send + 'static,
    {
        Self {
            tx_hash,
            confirmation: confirmation.boxed(),
        }
    }

    /// Hash of the broadcast transaction
    pub fn tx_hash(&self) -> H256 {
        self.tx_hash
    }

    /// Wait until the transaction is mined, dropped or timed out.
    pub async fn confirmed(self) -> ChainResult<TxOutcome> {
        self.confirmation.await
    }
}

impl fmt::Debug for PendingTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTransaction")
            .field("tx_hash", &self.tx_hash)
            .finish_non_exhaustive()
    }
}
