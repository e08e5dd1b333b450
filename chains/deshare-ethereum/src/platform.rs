#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::prelude::Middleware;
use tracing::instrument;

use deshare_core::{
    ChainResult, ContractHandle, CreateFundParams, DeshareContract, FundPlatform,
    PendingTransaction, TransactionOverrides, H160,
};

use crate::contracts::{FundPlatform as EthereumFundPlatformInternal, FUNDPLATFORM_ABI};
use crate::tx::{apply_overrides, report_tx};

/// A reference to the fund platform contract
#[derive(Debug)]
pub struct EthereumFundPlatform<M>
where
    M: Middleware,
{
    contract: Arc<EthereumFundPlatformInternal<M>>,
    provider: Arc<M>,
    confirmation_timeout: Duration,
}

impl<M> EthereumFundPlatform<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to the platform at `address`
    pub fn new(provider: Arc<M>, address: H160, confirmation_timeout: Duration) -> Self {
        Self {
            contract: Arc::new(EthereumFundPlatformInternal::new(
                address,
                provider.clone(),
            )),
            provider,
            confirmation_timeout,
        }
    }
}

impl<M> DeshareContract for EthereumFundPlatform<M>
where
    M: Middleware + 'static,
{
    fn handle(&self) -> ContractHandle {
        crate::contract_handle(self.contract.address(), &FUNDPLATFORM_ABI)
    }
}

#[async_trait]
impl<M> FundPlatform for EthereumFundPlatform<M>
where
    M: Middleware + 'static,
{
    #[instrument(err, skip(self))]
    async fn get_all_funds(&self, caller: H160) -> ChainResult<Vec<H160>> {
        Ok(self.contract.get_all_funds().from(caller).call().await?)
    }

    #[instrument(err, skip(self))]
    async fn create_fund(
        &self,
        params: CreateFundParams,
        sender: H160,
        overrides: TransactionOverrides,
    ) -> ChainResult<PendingTransaction> {
        let tx = self
            .contract
            .create_fund(
                params.initial_amount,
                params.name,
                params.symbol,
                params.fund_type,
                params.base_currency,
                params.seed_funding,
                params.manager,
            )
            .from(sender);
        let tx = apply_overrides(tx, &overrides);
        report_tx(tx, self.provider.clone(), self.confirmation_timeout).await
    }
}

#[cfg(test)]
mod test {
    use ethers::abi::{self, Token};
    use ethers::providers::Provider;
    use ethers::types::Bytes;

    use super::*;

    fn platform() -> (
        EthereumFundPlatform<Provider<ethers::providers::MockProvider>>,
        ethers::providers::MockProvider,
    ) {
        let (provider, mock) = Provider::mocked();
        let platform = EthereumFundPlatform::new(
            Arc::new(provider),
            H160::repeat_byte(0xee),
            Duration::from_secs(1),
        );
        (platform, mock)
    }

    #[tokio::test]
    async fn lists_fund_addresses() {
        let (platform, mock) = platform();
        let funds = vec![H160::repeat_byte(0xa), H160::repeat_byte(0xb)];
        mock.push::<Bytes, _>(Bytes::from(abi::encode(&[Token::Array(
            funds.iter().copied().map(Token::Address).collect(),
        )])))
        .unwrap();

        assert_eq!(platform.get_all_funds(H160::zero()).await.unwrap(), funds);
    }

    #[tokio::test]
    async fn empty_platform_lists_nothing() {
        let (platform, mock) = platform();
        mock.push::<Bytes, _>(Bytes::from(abi::encode(&[Token::Array(vec![])])))
            .unwrap();

        assert!(platform.get_all_funds(H160::zero()).await.unwrap().is_empty());
    }

    #[test]
    fn handle_exposes_the_factory_interface() {
        let (platform, _mock) = platform();
        let handle = platform.handle();
        assert_eq!(handle.address, H160::repeat_byte(0xee));
        assert_eq!(
            handle.interface,
            vec![
                "createFund(uint256,string,string,string,address,uint256,address)".to_owned(),
                "getAllFunds()".to_owned(),
            ]
        );
    }
}
