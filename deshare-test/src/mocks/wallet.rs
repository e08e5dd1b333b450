#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use deshare_core::*;

mock! {
    pub WalletProvider {
        pub fn _request_accounts(&self) -> ChainResult<Vec<H160>> {}

        pub fn _accounts(&self) -> ChainResult<Vec<H160>> {}
    }
}

impl std::fmt::Debug for MockWalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockWalletProvider")
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> ChainResult<Vec<H160>> {
        self._request_accounts()
    }

    async fn accounts(&self) -> ChainResult<Vec<H160>> {
        self._accounts()
    }
}
