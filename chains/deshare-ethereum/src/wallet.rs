use std::sync::Arc;

use async_trait::async_trait;
use ethers::prelude::Middleware;
use tracing::{debug, instrument};

use deshare_core::{ChainCommunicationError, ChainResult, WalletProvider, H160};

/// Wallet accounts as exposed through a middleware stack.
///
/// A stack with a local signer answers with the signer address and never
/// prompts. Otherwise the node is asked, the way a browser wallet is: first
/// `eth_requestAccounts`, then `eth_accounts`.
#[derive(Debug, derive_new::new)]
pub struct EthereumWalletProvider<M>
where
    M: Middleware,
{
    provider: Arc<M>,
}

#[async_trait]
impl<M> WalletProvider for EthereumWalletProvider<M>
where
    M: Middleware + 'static,
{
    #[instrument(err, skip(self))]
    async fn request_accounts(&self) -> ChainResult<Vec<H160>> {
        if let Some(sender) = self.provider.default_sender() {
            debug!(?sender, "using local signer account");
            return Ok(vec![sender]);
        }
        Ok(self
            .provider
            .provider()
            .request("eth_requestAccounts", ())
            .await?)
    }

    #[instrument(err, skip(self))]
    async fn accounts(&self) -> ChainResult<Vec<H160>> {
        if let Some(sender) = self.provider.default_sender() {
            return Ok(vec![sender]);
        }
        self.provider
            .get_accounts()
            .await
            .map_err(ChainCommunicationError::from_other)
    }
}
