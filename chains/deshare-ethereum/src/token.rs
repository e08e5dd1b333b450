#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::prelude::Middleware;
use tracing::instrument;

use deshare_core::{
    ChainResult, ContractHandle, DeshareContract, Erc20Token, PendingTransaction,
    TransactionOverrides, H160, U256,
};

use crate::contracts::{Erc20 as EthereumErc20Internal, ERC20_ABI};
use crate::tx::{apply_overrides, report_tx};

/// A reference to a base currency token
#[derive(Debug)]
pub struct EthereumErc20<M>
where
    M: Middleware,
{
    contract: Arc<EthereumErc20Internal<M>>,
    provider: Arc<M>,
    confirmation_timeout: Duration,
    overrides: TransactionOverrides,
}

impl<M> EthereumErc20<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to the token at `address`. Approvals are sent with
    /// `overrides`.
    pub fn new(
        provider: Arc<M>,
        address: H160,
        confirmation_timeout: Duration,
        overrides: TransactionOverrides,
    ) -> Self {
        Self {
            contract: Arc::new(EthereumErc20Internal::new(address, provider.clone())),
            provider,
            confirmation_timeout,
            overrides,
        }
    }
}

impl<M> DeshareContract for EthereumErc20<M>
where
    M: Middleware + 'static,
{
    fn handle(&self) -> ContractHandle {
        crate::contract_handle(self.contract.address(), &ERC20_ABI)
    }
}

#[async_trait]
impl<M> Erc20Token for EthereumErc20<M>
where
    M: Middleware + 'static,
{
    #[instrument(err, skip(self))]
    async fn approve(
        &self,
        spender: H160,
        amount: U256,
        sender: H160,
    ) -> ChainResult<PendingTransaction> {
        let tx = self.contract.approve(spender, amount).from(sender);
        let tx = apply_overrides(tx, &self.overrides);
        report_tx(tx, self.provider.clone(), self.confirmation_timeout).await
    }
}

#[cfg(test)]
mod test {
    use ethers::providers::Provider;

    use super::*;

    #[test]
    fn handle_exposes_only_approve() {
        let (provider, _mock) = Provider::mocked();
        let token = EthereumErc20::new(
            Arc::new(provider),
            H160::repeat_byte(0x11),
            Duration::from_secs(1),
            TransactionOverrides::default(),
        );
        let handle = token.handle();
        assert_eq!(handle.address, H160::repeat_byte(0x11));
        assert_eq!(handle.interface, vec!["approve(address,uint256)".to_owned()]);
    }
}
