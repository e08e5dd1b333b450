use eyre::{bail, Result};
use prettytable::{format, row, Table};
use strum::IntoEnumIterator;
use tracing::info;

use deshare_base::display::ConsoleDisplay;
use deshare_base::{CreateFundRequest, DeshareApp, PreApproveRequest, TxState};
use deshare_core::{Currency, CurrencyAddresses};

pub async fn funds(app: &DeshareApp, display: &ConsoleDisplay, json: bool) -> Result<()> {
    let records = app.start().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        display.print_funds();
    }
    Ok(())
}

pub async fn approve(app: &DeshareApp, currency: Currency, amount: String) -> Result<()> {
    app.connect().await?;
    let state = app
        .pre_approve(&PreApproveRequest {
            base_currency: currency.to_string(),
            seed_funding: amount,
        })
        .await?;
    finish(state)
}

pub async fn create_fund(
    app: &DeshareApp,
    display: &ConsoleDisplay,
    request: CreateFundRequest,
) -> Result<()> {
    app.connect().await?;
    let state = app.create_fund(&request).await?;
    if matches!(state, TxState::Confirmed(_)) {
        display.print_funds();
    }
    finish(state)
}

pub fn print_currencies(currencies: &CurrencyAddresses) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Currency", "Token"]);
    for currency in Currency::iter() {
        table.add_row(row![currency, format!("{:?}", currencies.address_of(currency))]);
    }
    table.printstd();
}

fn finish(state: TxState) -> Result<()> {
    match state {
        TxState::Confirmed(outcome) => {
            info!(txid = ?outcome.txid, gas_used = %outcome.gas_used, "done");
            Ok(())
        }
        TxState::Failed { reason, .. } => bail!("transaction failed: {reason}"),
        TxState::Idle | TxState::Submitted(_) => bail!("transaction did not complete"),
    }
}
