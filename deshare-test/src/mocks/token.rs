#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use deshare_core::*;

mock! {
    pub Erc20 {
        pub fn _address(&self) -> H160 {}

        pub fn _approve(
            &self,
            spender: H160,
            amount: U256,
            sender: H160,
        ) -> ChainResult<PendingTransaction> {}
    }
}

impl std::fmt::Debug for MockErc20 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockErc20")
    }
}

#[async_trait]
impl Erc20Token for MockErc20 {
    async fn approve(
        &self,
        spender: H160,
        amount: U256,
        sender: H160,
    ) -> ChainResult<PendingTransaction> {
        self._approve(spender, amount, sender)
    }
}

impl DeshareContract for MockErc20 {
    fn handle(&self) -> ContractHandle {
        ContractHandle::new(self._address(), vec![])
    }
}
