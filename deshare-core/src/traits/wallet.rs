use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{ChainCommunicationError, ChainResult, H160};

/// Account authorization, as answered by a wallet.
#[async_trait]
#[auto_impl(Box, Arc)]
pub trait WalletProvider: Send + Sync + Debug {
    /// Ask the wallet to expose its accounts (`eth_requestAccounts`). May wait
    /// on the user; a refusal comes back as an error.
    async fn request_accounts(&self) -> ChainResult<Vec<H160>>;

    /// Accounts currently exposed (`eth_accounts`), selected account first.
    async fn accounts(&self) -> ChainResult<Vec<H160>>;
}

/// Reasons a wallet session could not be established.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No wallet provider is configured at all
    #[error("no wallet provider found")]
    ProviderAbsent,
    /// The wallet refused to expose accounts; connecting again may succeed
    #[error("wallet authorization rejected: {0}")]
    AuthorizationRejected(#[source] ChainCommunicationError),
    /// Authorized, but no account is selected
    #[error("wallet exposes no accounts")]
    NoAccounts,
    /// Reading the selected account failed
    #[error(transparent)]
    Chain(#[from] ChainCommunicationError),
}
