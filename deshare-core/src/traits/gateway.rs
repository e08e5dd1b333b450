use std::fmt::Debug;

use auto_impl::auto_impl;

use crate::{Erc20Token, Fund, FundPlatform, H160};

/// Builds contract proxies bound to one chain connection.
#[auto_impl(Box, Arc)]
pub trait ContractGateway: Send + Sync + Debug {
    /// Proxy for the platform contract at `address`
    fn fund_platform(&self, address: H160) -> Box<dyn FundPlatform>;

    /// Proxy for the fund contract at `address`
    fn fund(&self, address: H160) -> Box<dyn Fund>;

    /// Proxy for the token contract at `address`
    fn token(&self, address: H160) -> Box<dyn Erc20Token>;
}
