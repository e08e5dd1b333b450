use std::collections::HashSet;
use std::future::Future;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use deshare_core::{
    Action, AmountError, ChainCommunicationError, ChainResult, DisplaySurface, Notice,
    PendingTransaction, TxOutcome, WalletError, H256,
};

use crate::Explorer;

pub use listing::*;

/// Fund table population
mod listing;

/// Reasons a user action could not run.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// There is no wallet session
    #[error("wallet is not connected")]
    NotConnected,
    /// The same action is still waiting for its transaction
    #[error("{0} is already in flight")]
    ActionInFlight(Action),
    /// No token is configured for this ticker
    #[error("unsupported base currency {0:?}")]
    UnsupportedCurrency(String),
    /// A user-entered amount did not parse
    #[error(transparent)]
    Amount(#[from] AmountError),
    /// Connecting the wallet failed
    #[error(transparent)]
    Wallet(#[from] WalletError),
    /// A chain read failed
    #[error(transparent)]
    Chain(#[from] ChainCommunicationError),
}

/// Where one send is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxState {
    /// Nothing broadcast yet
    Idle,
    /// Broadcast, waiting to be mined
    Submitted(H256),
    /// Mined and executed
    Confirmed(TxOutcome),
    /// Rejected before broadcast (no hash), reverted, dropped or timed out
    Failed {
        /// Hash, if the transaction was broadcast
        tx_hash: Option<H256>,
        /// What went wrong
        reason: String,
    },
}

impl TxState {
    /// Confirmed or failed
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxState::Confirmed(_) | TxState::Failed { .. })
    }
}

/// Tracks which actions have a transaction in flight.
#[derive(Debug, Default)]
pub struct InFlightGuard {
    actions: Mutex<HashSet<Action>>,
}

impl InFlightGuard {
    /// Mark `action` in flight until the returned ticket is dropped.
    pub fn try_start(&self, action: Action) -> Result<InFlightTicket<'_>, WorkflowError> {
        if !self.actions.lock().insert(action) {
            return Err(WorkflowError::ActionInFlight(action));
        }
        Ok(InFlightTicket {
            guard: self,
            action,
        })
    }

    /// Whether `action` is in flight
    pub fn is_in_flight(&self, action: Action) -> bool {
        self.actions.lock().contains(&action)
    }
}

/// Releases its action on drop.
#[derive(Debug)]
#[must_use]
pub struct InFlightTicket<'a> {
    guard: &'a InFlightGuard,
    action: Action,
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        self.guard.actions.lock().remove(&self.action);
    }
}

struct Messages {
    label: &'static str,
    pending: &'static str,
    success: &'static str,
}

fn messages(action: Action) -> Messages {
    match action {
        Action::PreApprove => Messages {
            label: "Pre-approval",
            pending: "Pre-approval txn sent and pending confirmation. Check your transaction status",
            success: "Pre-approval to platform smart contract successfully granted. Check your transaction status",
        },
        Action::CreateFund => Messages {
            label: "Fund creation",
            pending: "Txn sent and pending confirmation. Check your transaction status",
            success: "Mutual fund successfully created. Check your transaction status",
        },
    }
}

/// Drives one send through `Idle -> Submitted -> {Confirmed | Failed}` and
/// mirrors each step on the display.
pub struct TransactionWorkflow<'a> {
    action: Action,
    display: &'a dyn DisplaySurface,
    explorer: &'a Explorer,
}

impl<'a> TransactionWorkflow<'a> {
    /// Workflow for `action`
    pub fn new(action: Action, display: &'a dyn DisplaySurface, explorer: &'a Explorer) -> Self {
        Self {
            action,
            display,
            explorer,
        }
    }

    /// Broadcast with `send` and wait for the outcome. Returns the terminal
    /// state; the display has been updated for every step on the way.
    pub async fn run<F>(&self, send: F) -> TxState
    where
        F: Future<Output = ChainResult<PendingTransaction>>,
    {
        let pending = match send.await {
            Ok(pending) => pending,
            Err(err) => return self.fail(None, err.to_string()),
        };

        let tx_hash = pending.tx_hash();
        self.transition(TxState::Idle, TxState::Submitted(tx_hash));
        self.display.set_control_enabled(self.action, false);
        self.display.set_loading(true);
        self.display.show_notice(
            Notice::info(messages(self.action).pending).with_link(self.explorer.tx_url(tx_hash)),
        );

        match pending.confirmed().await {
            Ok(outcome) if outcome.executed => self.confirm(outcome),
            Ok(_) => self.fail(Some(tx_hash), "transaction reverted".to_owned()),
            Err(err) => self.fail(Some(tx_hash), err.to_string()),
        }
    }

    fn confirm(&self, outcome: TxOutcome) -> TxState {
        let state = TxState::Confirmed(outcome);
        self.transition(TxState::Submitted(outcome.txid), state.clone());
        info!(action = %self.action, txid = ?outcome.txid, gas_used = %outcome.gas_used, "transaction confirmed");
        self.display.set_loading(false);
        self.display.set_control_enabled(self.action, true);
        self.display.show_notice(
            Notice::success(messages(self.action).success)
                .with_link(self.explorer.tx_url(outcome.txid)),
        );
        state
    }

    fn fail(&self, tx_hash: Option<H256>, reason: String) -> TxState {
        let from = tx_hash.map(TxState::Submitted).unwrap_or(TxState::Idle);
        let state = TxState::Failed {
            tx_hash,
            reason: reason.clone(),
        };
        self.transition(from, state.clone());
        error!(action = %self.action, ?tx_hash, %reason, "transaction failed");
        self.display.set_loading(false);
        self.display.set_control_enabled(self.action, true);
        let notice = Notice::error(format!("{} failed: {reason}", messages(self.action).label));
        self.display.show_notice(match tx_hash {
            Some(hash) => notice.with_link(self.explorer.tx_url(hash)),
            None => notice,
        });
        state
    }

    fn transition(&self, from: TxState, to: TxState) {
        debug!(action = %self.action, ?from, ?to, "transaction state change");
    }
}
