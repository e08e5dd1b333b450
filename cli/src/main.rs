//! `deshare`: list funds, approve seed funding and create funds on the
//! DeShare platform from the terminal.

#![forbid(unsafe_code)]
#![warn(unused_extern_crates)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;

use deshare_base::display::ConsoleDisplay;
use deshare_base::settings::Settings;
use deshare_base::DeshareApp;

use crate::args::{Args, Command};

mod args;
mod cmd;

async fn _main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let settings = Settings::load()?;
    settings.tracing.start_tracing()?;

    if args.command == Command::Currencies {
        cmd::print_currencies(&settings.currencies);
        return Ok(());
    }

    let conf = settings.app_conf()?;
    let json = matches!(args.command, Command::Funds { json: true });
    let display = Arc::new(ConsoleDisplay::new(conf.explorer.clone(), json));
    let connection = settings.build_connection().await?;
    let app = DeshareApp::new(conf, connection, display.clone());

    match args.command {
        Command::Funds { json } => cmd::funds(&app, &display, json).await,
        Command::Approve { currency, amount } => cmd::approve(&app, currency, amount).await,
        Command::CreateFund {
            initial_amount,
            name,
            symbol,
            fund_type,
            currency,
            seed_funding,
        } => {
            let request = deshare_base::CreateFundRequest {
                initial_amount,
                name,
                symbol,
                fund_type,
                base_currency: currency.to_string(),
                seed_funding,
            };
            cmd::create_fund(&app, &display, request).await
        }
        Command::Currencies => Ok(()),
    }
}

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(_main())
}
