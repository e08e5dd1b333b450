use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{ChainResult, DeshareContract, PendingTransaction, H160, U256};

/// Arguments of `createFund` on the platform contract, already scaled to wei.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct CreateFundParams {
    /// Initial share supply
    pub initial_amount: U256,
    /// Fund name
    pub name: String,
    /// Share token symbol
    pub symbol: String,
    /// Strategy type label
    pub fund_type: String,
    /// Token contract of the base currency
    pub base_currency: H160,
    /// Base currency moved into the fund on creation
    pub seed_funding: U256,
    /// Manager of the new fund
    pub manager: H160,
}

/// Optional gas parameters for a send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionOverrides {
    /// Gas limit
    pub gas_limit: Option<U256>,
    /// Gas price in wei
    pub gas_price: Option<U256>,
    /// Native value attached to the call
    pub value: Option<U256>,
    /// Send a legacy (pre EIP-1559) transaction
    pub legacy: bool,
}

/// The fund platform: a factory contract that deploys and enumerates funds.
#[async_trait]
#[auto_impl(Box, Arc)]
pub trait FundPlatform: DeshareContract + Send + Sync + Debug {
    /// Addresses of every fund the platform has created
    async fn get_all_funds(&self, caller: H160) -> ChainResult<Vec<H160>>;

    /// Broadcast a `createFund` transaction from `sender`.
    async fn create_fund(
        &self,
        params: CreateFundParams,
        sender: H160,
        overrides: TransactionOverrides,
    ) -> ChainResult<PendingTransaction>;
}

/// A single deployed fund. All reads are views.
#[async_trait]
#[auto_impl(Box, Arc)]
pub trait Fund: DeshareContract + Send + Sync + Debug {
    /// `name()`
    async fn name(&self, caller: H160) -> ChainResult<String>;

    /// `symbol()`
    async fn symbol(&self, caller: H160) -> ChainResult<String>;

    /// `getPortfolioSize()`, in wei of the base currency
    async fn portfolio_size(&self, caller: H160) -> ChainResult<U256>;

    /// `getFundType()`
    async fn fund_type(&self, caller: H160) -> ChainResult<String>;

    /// `totalSupply()`, in wei of fund shares
    async fn total_supply(&self, caller: H160) -> ChainResult<U256>;
}
