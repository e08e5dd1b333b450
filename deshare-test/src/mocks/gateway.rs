#![allow(non_snake_case)]

use mockall::*;

use deshare_core::*;

mock! {
    pub Gateway {
        pub fn _fund_platform(&self, address: H160) -> Box<dyn FundPlatform> {}

        pub fn _fund(&self, address: H160) -> Box<dyn Fund> {}

        pub fn _token(&self, address: H160) -> Box<dyn Erc20Token> {}
    }
}

impl std::fmt::Debug for MockGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockGateway")
    }
}

impl ContractGateway for MockGateway {
    fn fund_platform(&self, address: H160) -> Box<dyn FundPlatform> {
        self._fund_platform(address)
    }

    fn fund(&self, address: H160) -> Box<dyn Fund> {
        self._fund(address)
    }

    fn token(&self, address: H160) -> Box<dyn Erc20Token> {
        self._token(address)
    }
}
