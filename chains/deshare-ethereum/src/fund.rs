#![allow(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use ethers::prelude::Middleware;
use tracing::instrument;

use deshare_core::{ChainResult, ContractHandle, DeshareContract, Fund, H160, U256};

use crate::contracts::{Fund as EthereumFundInternal, FUND_ABI};

/// A reference to a deployed fund contract
#[derive(Debug)]
pub struct EthereumFund<M>
where
    M: Middleware,
{
    contract: Arc<EthereumFundInternal<M>>,
}

impl<M> EthereumFund<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to the fund at `address`
    pub fn new(provider: Arc<M>, address: H160) -> Self {
        Self {
            contract: Arc::new(EthereumFundInternal::new(address, provider)),
        }
    }
}

impl<M> DeshareContract for EthereumFund<M>
where
    M: Middleware + 'static,
{
    fn handle(&self) -> ContractHandle {
        crate::contract_handle(self.contract.address(), &FUND_ABI)
    }
}

#[async_trait]
impl<M> Fund for EthereumFund<M>
where
    M: Middleware + 'static,
{
    #[instrument(err, skip(self))]
    async fn name(&self, caller: H160) -> ChainResult<String> {
        Ok(self.contract.name().from(caller).call().await?)
    }

    #[instrument(err, skip(self))]
    async fn symbol(&self, caller: H160) -> ChainResult<String> {
        Ok(self.contract.symbol().from(caller).call().await?)
    }

    #[instrument(err, skip(self))]
    async fn portfolio_size(&self, caller: H160) -> ChainResult<U256> {
        Ok(self.contract.get_portfolio_size().from(caller).call().await?)
    }

    #[instrument(err, skip(self))]
    async fn fund_type(&self, caller: H160) -> ChainResult<String> {
        Ok(self.contract.get_fund_type().from(caller).call().await?)
    }

    #[instrument(err, skip(self))]
    async fn total_supply(&self, caller: H160) -> ChainResult<U256> {
        Ok(self.contract.total_supply().from(caller).call().await?)
    }
}

#[cfg(test)]
mod test {
    use ethers::abi::{self, Token};
    use ethers::providers::Provider;
    use ethers::types::Bytes;

    use super::*;

    #[tokio::test]
    async fn decodes_view_results() {
        let (provider, mock) = Provider::mocked();
        let fund = EthereumFund::new(Arc::new(provider), H160::repeat_byte(0xf1));
        let caller = H160::repeat_byte(0xaa);

        mock.push::<Bytes, _>(Bytes::from(abi::encode(&[Token::String("Alpha Growth".into())])))
            .unwrap();
        assert_eq!(fund.name(caller).await.unwrap(), "Alpha Growth");

        let supply = U256::exp10(18) * U256::from(42u64);
        mock.push::<Bytes, _>(Bytes::from(abi::encode(&[Token::Uint(supply)])))
            .unwrap();
        assert_eq!(fund.total_supply(caller).await.unwrap(), supply);
    }

    #[tokio::test]
    async fn rpc_failures_become_errors() {
        let (provider, _mock) = Provider::mocked();
        let fund = EthereumFund::new(Arc::new(provider), H160::repeat_byte(0xf1));
        // no queued response
        assert!(fund.symbol(H160::zero()).await.is_err());
    }

    #[test]
    fn handle_lists_view_methods() {
        let (provider, _mock) = Provider::mocked();
        let fund = EthereumFund::new(Arc::new(provider), H160::repeat_byte(0xf1));
        let handle = fund.handle();
        assert_eq!(handle.address, H160::repeat_byte(0xf1));
        for signature in [
            "name()",
            "symbol()",
            "getPortfolioSize()",
            "getFundType()",
            "totalSupply()",
        ] {
            assert!(handle.interface.iter().any(|s| s == signature), "{signature}");
        }
    }
}
