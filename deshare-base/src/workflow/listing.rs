use std::future::Future;

use futures::future::join_all;
use tracing::{error, info, instrument, warn};

use deshare_core::{
    format_portfolio_size, from_wei, ChainResult, ContractGateway, DisplaySurface, FundColumn,
    FundPlatform, FundRecord, H160,
};

/// Reads every fund the platform knows about into the display's fund table.
pub struct FundListingSync<'a> {
    platform: &'a dyn FundPlatform,
    gateway: &'a dyn ContractGateway,
    display: &'a dyn DisplaySurface,
    caller: H160,
}

impl<'a> FundListingSync<'a> {
    /// Listing of `platform`, read as `caller`
    pub fn new(
        platform: &'a dyn FundPlatform,
        gateway: &'a dyn ContractGateway,
        display: &'a dyn DisplaySurface,
        caller: H160,
    ) -> Self {
        Self {
            platform,
            gateway,
            display,
            caller,
        }
    }

    /// Clear the fund table and repopulate it.
    pub async fn refresh(&self) -> ChainResult<Vec<FundRecord>> {
        self.sync(true).await
    }

    /// Append a row per fund without clearing. Funds already in the table get
    /// a second row.
    pub async fn append_listing(&self) -> ChainResult<Vec<FundRecord>> {
        self.sync(false).await
    }

    #[instrument(skip(self), fields(platform = ?self.platform.address()))]
    async fn sync(&self, clear: bool) -> ChainResult<Vec<FundRecord>> {
        let funds = self
            .platform
            .get_all_funds(self.caller)
            .await
            .map_err(|err| {
                error!(error = %err, "failed to enumerate funds");
                err
            })?;
        info!(count = funds.len(), "listing funds");

        if clear {
            self.display.clear_fund_rows();
        }
        Ok(join_all(funds.into_iter().map(|fund| self.load_fund(fund))).await)
    }

    async fn load_fund(&self, address: H160) -> FundRecord {
        let fund = self.gateway.fund(address);
        let row = self.display.append_fund_row(address);

        let caller = self.caller;
        let cell = |column| (row, address, column);
        let (name, symbol, portfolio_size, total_supply, fund_type) = futures::join!(
            self.read_cell(cell(FundColumn::Name), fund.name(caller), Clone::clone),
            self.read_cell(cell(FundColumn::Symbol), fund.symbol(caller), Clone::clone),
            self.read_cell(
                cell(FundColumn::PortfolioSize),
                fund.portfolio_size(caller),
                |size| format_portfolio_size(*size),
            ),
            self.read_cell(
                cell(FundColumn::TotalSupply),
                fund.total_supply(caller),
                |supply| from_wei(*supply),
            ),
            self.read_cell(cell(FundColumn::FundType), fund.fund_type(caller), Clone::clone),
        );

        FundRecord {
            address,
            name,
            symbol,
            portfolio_size,
            total_supply,
            fund_type,
        }
    }

    /// Await one field read and fill its cell in `row`. A failed read leaves
    /// the cell empty.
    async fn read_cell<T, F, R>(
        &self,
        (row, address, column): (usize, H160, FundColumn),
        read: F,
        render: R,
    ) -> Option<T>
    where
        F: Future<Output = ChainResult<T>>,
        R: FnOnce(&T) -> String,
    {
        match read.await {
            Ok(value) => {
                self.display.set_fund_cell(row, column, render(&value));
                Some(value)
            }
            Err(err) => {
                warn!(fund = ?address, field = %column, error = %err, "failed to read fund field");
                None
            }
        }
    }
}
