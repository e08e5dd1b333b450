use std::sync::Arc;
use std::time::Duration;

use ethers::prelude::Middleware;

use deshare_core::{
    ContractGateway, Erc20Token, Fund, FundPlatform, TransactionOverrides, H160,
};

use crate::{EthereumErc20, EthereumFund, EthereumFundPlatform};

/// Builds contract proxies that share one middleware stack.
#[derive(Debug, derive_new::new)]
pub struct EthereumGateway<M>
where
    M: Middleware,
{
    provider: Arc<M>,
    confirmation_timeout: Duration,
    /// Send approvals as legacy transactions
    legacy: bool,
}

impl<M> ContractGateway for EthereumGateway<M>
where
    M: Middleware + 'static,
{
    fn fund_platform(&self, address: H160) -> Box<dyn FundPlatform> {
        Box::new(EthereumFundPlatform::new(
            self.provider.clone(),
            address,
            self.confirmation_timeout,
        ))
    }

    fn fund(&self, address: H160) -> Box<dyn Fund> {
        Box::new(EthereumFund::new(self.provider.clone(), address))
    }

    fn token(&self, address: H160) -> Box<dyn Erc20Token> {
        let overrides = TransactionOverrides {
            legacy: self.legacy,
            ..Default::default()
        };
        Box::new(EthereumErc20::new(
            self.provider.clone(),
            address,
            self.confirmation_timeout,
            overrides,
        ))
    }
}
