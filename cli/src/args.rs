use clap::{Parser, Subcommand};

use deshare_core::Currency;

/// Command line client for the DeShare fund platform
#[derive(Parser, Debug, PartialEq)]
#[command(name = "deshare", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List every fund on the platform
    Funds {
        /// Print the funds as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Approve the platform to spend seed funding in a base currency
    Approve {
        /// Base currency ticker
        #[arg(short, long, default_value_t = Currency::Usdt)]
        currency: Currency,
        /// Seed funding amount, e.g. 100 or 12.5
        #[arg(short, long)]
        amount: String,
    },
    /// Create a fund, then list the funds again
    CreateFund {
        /// Initial share supply
        #[arg(long)]
        initial_amount: String,
        /// Fund name
        #[arg(long)]
        name: String,
        /// Share symbol; an `A` prefix is added
        #[arg(long)]
        symbol: String,
        /// Strategy type label
        #[arg(long)]
        fund_type: String,
        /// Base currency ticker
        #[arg(long, default_value_t = Currency::Usdt)]
        currency: Currency,
        /// Seed funding in the base currency
        #[arg(long)]
        seed_funding: String,
    },
    /// Show supported base currencies and their token contracts
    Currencies,
}
