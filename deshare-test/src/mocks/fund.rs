#![allow(non_snake_case)]

use std::time::Duration;

use async_trait::async_trait;
use mockall::*;

use deshare_core::*;

mock! {
    pub FundPlatform {
        pub fn _handle(&self) -> ContractHandle {}

        pub fn _get_all_funds(&self, caller: H160) -> ChainResult<Vec<H160>> {}

        pub fn _create_fund(
            &self,
            params: CreateFundParams,
            sender: H160,
            overrides: TransactionOverrides,
        ) -> ChainResult<PendingTransaction> {}
    }
}

impl std::fmt::Debug for MockFundPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockFundPlatform")
    }
}

#[async_trait]
impl FundPlatform for MockFundPlatform {
    async fn get_all_funds(&self, caller: H160) -> ChainResult<Vec<H160>> {
        self._get_all_funds(caller)
    }

    async fn create_fund(
        &self,
        params: CreateFundParams,
        sender: H160,
        overrides: TransactionOverrides,
    ) -> ChainResult<PendingTransaction> {
        self._create_fund(params, sender, overrides)
    }
}

impl DeshareContract for MockFundPlatform {
    fn handle(&self) -> ContractHandle {
        self._handle()
    }
}

mock! {
    pub Fund {
        pub fn _address(&self) -> H160 {}

        pub fn _name(&self, caller: H160) -> ChainResult<String> {}

        pub fn _symbol(&self, caller: H160) -> ChainResult<String> {}

        pub fn _portfolio_size(&self, caller: H160) -> ChainResult<U256> {}

        pub fn _fund_type(&self, caller: H160) -> ChainResult<String> {}

        pub fn _total_supply(&self, caller: H160) -> ChainResult<U256> {}
    }
}

impl std::fmt::Debug for MockFund {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockFund")
    }
}

#[async_trait]
impl Fund for MockFund {
    async fn name(&self, caller: H160) -> ChainResult<String> {
        self._name(caller)
    }

    async fn symbol(&self, caller: H160) -> ChainResult<String> {
        self._symbol(caller)
    }

    async fn portfolio_size(&self, caller: H160) -> ChainResult<U256> {
        self._portfolio_size(caller)
    }

    async fn fund_type(&self, caller: H160) -> ChainResult<String> {
        self._fund_type(caller)
    }

    async fn total_supply(&self, caller: H160) -> ChainResult<U256> {
        self._total_supply(caller)
    }
}

impl DeshareContract for MockFund {
    fn handle(&self) -> ContractHandle {
        ContractHandle::new(self._address(), vec![])
    }
}

/// A fund whose reads all succeed, each after sleeping for `delay`.
#[derive(Debug, Clone)]
pub struct DelayedFund {
    address: H160,
    delay: Duration,
}

impl DelayedFund {
    /// Fund at `address` answering every read after `delay`
    pub fn new(address: H160, delay: Duration) -> Self {
        Self { address, delay }
    }
}

#[async_trait]
impl Fund for DelayedFund {
    async fn name(&self, _caller: H160) -> ChainResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok(format!("Fund {:x}", self.address.0[0]))
    }

    async fn symbol(&self, _caller: H160) -> ChainResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok("DFND".into())
    }

    async fn portfolio_size(&self, _caller: H160) -> ChainResult<U256> {
        tokio::time::sleep(self.delay).await;
        Ok(U256::exp10(18))
    }

    async fn fund_type(&self, _caller: H160) -> ChainResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok("equity".into())
    }

    async fn total_supply(&self, _caller: H160) -> ChainResult<U256> {
        tokio::time::sleep(self.delay).await;
        Ok(U256::exp10(18))
    }
}

impl DeshareContract for DelayedFund {
    fn handle(&self) -> ContractHandle {
        ContractHandle::new(self.address, vec![])
    }
}
