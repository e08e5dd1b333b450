use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, instrument, warn};

use deshare_core::{
    to_wei, Action, ContractGateway, CreateFundParams, CurrencyAddresses, DisplaySurface,
    FundPlatform, FundRecord, Notice, TransactionOverrides, WalletProvider, H160, U256,
};

use crate::{
    connect_wallet, Explorer, FundListingSync, InFlightGuard, Session, TransactionWorkflow,
    TxState, WorkflowError,
};

/// Prefix every fund share symbol carries
pub const FUND_SYMBOL_PREFIX: &str = "A";

/// A live chain connection
#[derive(Debug, Clone)]
pub struct ChainConnection {
    /// Contract proxy factory
    pub gateway: Arc<dyn ContractGateway>,
    /// Account authorization
    pub wallet: Arc<dyn WalletProvider>,
}

/// Static configuration of the app
#[derive(Debug, Clone)]
pub struct AppConf {
    /// Fund platform contract
    pub platform: H160,
    /// Manager assigned to created funds
    pub fund_manager: H160,
    /// Base currency tokens
    pub currencies: CurrencyAddresses,
    /// Block explorer for links
    pub explorer: Explorer,
    /// Gas limit, gas price and fee for `createFund`
    pub creation_overrides: TransactionOverrides,
}

/// Approve the platform to move seed funding out of the sender's balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreApproveRequest {
    /// Base currency ticker, e.g. `USDT`
    pub base_currency: String,
    /// Decimal amount
    pub seed_funding: String,
}

/// Launch a fund. Amounts are decimal strings as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFundRequest {
    /// Initial share supply
    pub initial_amount: String,
    /// Fund name
    pub name: String,
    /// Symbol, without the fund prefix
    pub symbol: String,
    /// Strategy type label
    pub fund_type: String,
    /// Base currency ticker
    pub base_currency: String,
    /// Seed funding in the base currency
    pub seed_funding: String,
}

/// The DeShare client: one wallet session, the user actions and the fund
/// listing, all reporting to one display.
pub struct DeshareApp {
    conf: AppConf,
    connection: Option<ChainConnection>,
    platform: Option<Box<dyn FundPlatform>>,
    display: Arc<dyn DisplaySurface>,
    session: RwLock<Option<Session>>,
    in_flight: InFlightGuard,
}

impl DeshareApp {
    /// App over `connection`; `None` means there is no wallet provider.
    pub fn new(
        conf: AppConf,
        connection: Option<ChainConnection>,
        display: Arc<dyn DisplaySurface>,
    ) -> Self {
        let platform = connection
            .as_ref()
            .map(|connection| connection.gateway.fund_platform(conf.platform));
        Self {
            conf,
            connection,
            platform,
            display,
            session: RwLock::new(None),
            in_flight: InFlightGuard::default(),
        }
    }

    /// Current wallet session
    pub fn session(&self) -> Option<Session> {
        *self.session.read()
    }

    /// Authorize the wallet and start a session.
    pub async fn connect(&self) -> Result<Session, WorkflowError> {
        let wallet = self
            .connection
            .as_ref()
            .map(|connection| connection.wallet.as_ref() as &dyn WalletProvider);
        let session = connect_wallet(wallet, self.display.as_ref()).await?;
        *self.session.write() = Some(session);
        Ok(session)
    }

    /// End the session
    pub fn disconnect(&self) {
        if self.session.write().take().is_some() {
            info!("wallet disconnected");
        }
    }

    /// Connect and show the fund listing
    pub async fn start(&self) -> Result<Vec<FundRecord>, WorkflowError> {
        self.connect().await?;
        self.refresh_funds().await
    }

    /// Clear and repopulate the fund table
    pub async fn refresh_funds(&self) -> Result<Vec<FundRecord>, WorkflowError> {
        Ok(self.listing()?.refresh().await?)
    }

    /// Append the funds to the table without clearing it
    pub async fn append_funds(&self) -> Result<Vec<FundRecord>, WorkflowError> {
        Ok(self.listing()?.append_listing().await?)
    }

    /// Approve the platform to spend the seed funding in the chosen base
    /// currency.
    #[instrument(skip(self))]
    pub async fn pre_approve(
        &self,
        request: &PreApproveRequest,
    ) -> Result<TxState, WorkflowError> {
        let action = Action::PreApprove;
        let (session, connection, _) = self.prepare(action)?;
        let currency = self
            .currency(&request.base_currency)
            .map_err(|err| self.reject(action, err))?;
        let amount = to_wei(&request.seed_funding)
            .map_err(|err| self.reject(action, err.into()))?;
        let _ticket = self
            .in_flight
            .try_start(action)
            .map_err(|err| self.reject(action, err))?;

        let token = connection.gateway.token(currency);
        let state = self
            .workflow(action)
            .run(token.approve(self.conf.platform, amount, session.account))
            .await;
        Ok(state)
    }

    /// Create a fund and, once confirmed, refresh the listing.
    #[instrument(skip(self))]
    pub async fn create_fund(
        &self,
        request: &CreateFundRequest,
    ) -> Result<TxState, WorkflowError> {
        let action = Action::CreateFund;
        let (session, _, platform) = self.prepare(action)?;
        let params = self
            .create_fund_params(request)
            .map_err(|err| self.reject(action, err))?;
        let _ticket = self
            .in_flight
            .try_start(action)
            .map_err(|err| self.reject(action, err))?;

        let state = self
            .workflow(action)
            .run(platform.create_fund(
                params,
                session.account,
                self.conf.creation_overrides,
            ))
            .await;

        if matches!(state, TxState::Confirmed(_)) {
            if let Err(err) = self.refresh_funds().await {
                warn!(error = %err, "failed to refresh funds after creation");
            }
        }
        Ok(state)
    }

    fn create_fund_params(
        &self,
        request: &CreateFundRequest,
    ) -> Result<CreateFundParams, WorkflowError> {
        let base_currency = self.currency(&request.base_currency)?;
        let initial_amount = to_wei(&request.initial_amount)?;
        let seed_funding: U256 = to_wei(&request.seed_funding)?;
        Ok(CreateFundParams::new(
            initial_amount,
            request.name.clone(),
            format!("{FUND_SYMBOL_PREFIX}{}", request.symbol),
            request.fund_type.clone(),
            base_currency,
            seed_funding,
            self.conf.fund_manager,
        ))
    }

    fn currency(&self, ticker: &str) -> Result<H160, WorkflowError> {
        let address = self.conf.currencies.get_currency_address(ticker);
        if address.is_zero() {
            return Err(WorkflowError::UnsupportedCurrency(ticker.to_owned()));
        }
        Ok(address)
    }

    /// Session and contracts every action needs
    fn prepare(
        &self,
        action: Action,
    ) -> Result<(Session, &ChainConnection, &dyn FundPlatform), WorkflowError> {
        match (self.session(), &self.connection, &self.platform) {
            (Some(session), Some(connection), Some(platform)) => {
                Ok((session, connection, platform.as_ref()))
            }
            _ => Err(self.reject(action, WorkflowError::NotConnected)),
        }
    }

    fn listing(&self) -> Result<FundListingSync<'_>, WorkflowError> {
        match (self.session(), &self.connection, &self.platform) {
            (Some(session), Some(connection), Some(platform)) => Ok(FundListingSync::new(
                platform.as_ref(),
                connection.gateway.as_ref(),
                self.display.as_ref(),
                session.account,
            )),
            _ => Err(WorkflowError::NotConnected),
        }
    }

    fn workflow(&self, action: Action) -> TransactionWorkflow<'_> {
        TransactionWorkflow::new(action, self.display.as_ref(), &self.conf.explorer)
    }

    /// Show why `action` cannot run
    fn reject(&self, action: Action, err: WorkflowError) -> WorkflowError {
        warn!(%action, error = %err, "action rejected");
        self.display.show_notice(Notice::error(err.to_string()));
        err
    }
}
