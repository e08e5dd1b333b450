use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::prelude::{Http, LocalWallet, Middleware, Provider, Signer, SignerMiddleware};
use reqwest::Client;
use thiserror::Error;
use tracing::info;

use deshare_core::{ChainCommunicationError, ChainResult, ContractGateway, WalletProvider};

use crate::{ConnectionConf, EthereumGateway, EthereumWalletProvider};

const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

/// An error when connecting to an ethereum provider.
#[derive(Error, Debug)]
pub enum EthereumProviderConnectionError {
    /// Underlying reqwest lib threw an error
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

impl From<EthereumProviderConnectionError> for ChainCommunicationError {
    fn from(e: EthereumProviderConnectionError) -> Self {
        ChainCommunicationError::from_other(e)
    }
}

/// A trait for dynamic trait creation with provider initialization.
#[async_trait]
pub trait BuildableWithProvider {
    /// The type that will be created.
    type Output;

    /// Construct a new instance of the associated trait using a connection
    /// config. This is the first step and will wrap the provider with a
    /// signer as needed.
    async fn build_with_connection_conf(
        &self,
        conn: &ConnectionConf,
        signer: Option<LocalWallet>,
    ) -> ChainResult<Self::Output> {
        let http_client = Client::builder()
            .timeout(HTTP_CLIENT_TIMEOUT)
            .build()
            .map_err(EthereumProviderConnectionError::from)?;
        let provider = Provider::new(Http::new_with_client(conn.url.clone(), http_client));

        Ok(if let Some(signer) = signer {
            let chain_id = provider.get_chainid().await?;
            let signer = signer.with_chain_id(chain_id.as_u64());
            info!(address = ?signer.address(), %chain_id, "using local signer");
            self.build_with_provider(SignerMiddleware::new(provider, signer), conn)
                .await
        } else {
            self.build_with_provider(provider, conn).await
        })
    }

    /// Construct a new instance of the associated trait using a provider.
    async fn build_with_provider<M: Middleware + 'static>(
        &self,
        provider: M,
        conn: &ConnectionConf,
    ) -> Self::Output;
}

/// Everything needed to talk to one chain: the wallet and the contracts.
#[derive(Debug, Clone)]
pub struct EthereumConnection {
    /// Contract proxy factory
    pub gateway: Arc<dyn ContractGateway>,
    /// Account authorization
    pub wallet: Arc<dyn WalletProvider>,
}

/// Builds an [`EthereumConnection`]
#[derive(Debug, Default)]
pub struct ConnectionBuilder {
    /// Send legacy (pre EIP-1559) transactions
    pub legacy: bool,
}

#[async_trait]
impl BuildableWithProvider for ConnectionBuilder {
    type Output = EthereumConnection;

    async fn build_with_provider<M: Middleware + 'static>(
        &self,
        provider: M,
        conn: &ConnectionConf,
    ) -> Self::Output {
        let provider = Arc::new(provider);
        EthereumConnection {
            gateway: Arc::new(EthereumGateway::new(
                provider.clone(),
                conn.confirmation_timeout,
                self.legacy,
            )),
            wallet: Arc::new(EthereumWalletProvider::new(provider)),
        }
    }
}
