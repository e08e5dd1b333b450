use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{ChainResult, DeshareContract, PendingTransaction, H160, U256};

/// An ERC-20 base currency token.
#[async_trait]
#[auto_impl(Box, Arc)]
pub trait Erc20Token: DeshareContract + Send + Sync + Debug {
    /// Broadcast `approve(spender, amount)` from `sender`.
    async fn approve(
        &self,
        spender: H160,
        amount: U256,
        sender: H160,
    ) -> ChainResult<PendingTransaction>;
}
