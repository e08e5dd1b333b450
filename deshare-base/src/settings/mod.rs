//! Settings for the DeShare client
//!
//! ### Configuration
//!
//! Settings are read from config files and then from the environment.
//!
//! Configuration key/value pairs are loaded in the following order, with later
//! sources taking precedence:
//!
//! 1. Every `*.json` file in `./config`.
//! 2. The files listed in `CONFIG_FILES` (comma separated), each one
//!    overwriting the previous ones as appropriate.
//! 3. Environment variables prefixed with `DESHARE_`. Nested keys are joined
//!    with a double underscore, e.g. `DESHARE_CHAIN__URL` sets `chain.url` and
//!    `DESHARE_TRANSACTION__GAS_LIMIT` sets `transaction.gas_limit`.
//!
//! `config/testnet.json.template` lists every key for BSC testnet with zero
//! contract and currency addresses. Copy it to `config/testnet.json` and fill
//! in the deployed addresses, or set them through the environment, e.g.
//! `DESHARE_CONTRACTS__PLATFORM`. A zero platform address is rejected.
//!
//! A minimal config file:
//!
//! ```json
//! {
//!   "chain": { "url": "https://data-seed-prebsc-1-s1.binance.org:8545" },
//!   "contracts": {
//!     "platform": "0x…",
//!     "fund_manager": "0x…"
//!   },
//!   "currencies": { "usdt": "0x…", "busd": "0x…" },
//!   "explorer_url": "https://testnet.bscscan.com"
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{ensure, Context, Result};
use serde::Deserialize;
use url::Url;

use deshare_core::{to_wei, CurrencyAddresses, TransactionOverrides, H160, U256};
use deshare_ethereum::{BuildableWithProvider, ConnectionBuilder, ConnectionConf};

pub use signers::*;
pub use trace::*;

use crate::{AppConf, ChainConnection, Explorer};

pub(crate) mod loader;
/// Signer configuration
mod signers;
/// Tracing subscriber management
mod trace;

/// Chain connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConf {
    /// JSON-RPC endpoint. Without it there is no wallet provider.
    #[serde(default)]
    pub url: Option<Url>,
    /// Local signer; accounts come from the node when absent
    #[serde(default)]
    pub signer: Option<SignerConf>,
    /// Seconds to wait for a transaction to be mined
    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,
}

impl Default for ChainConf {
    fn default() -> Self {
        Self {
            url: None,
            signer: None,
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
        }
    }
}

fn default_confirmation_timeout_secs() -> u64 {
    deshare_ethereum::DEFAULT_CONFIRMATION_TIMEOUT.as_secs()
}

/// Deployed DeShare contracts
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConf {
    /// Fund platform (factory) contract
    pub platform: H160,
    /// Manager assigned to newly created funds
    pub fund_manager: H160,
}

/// Gas parameters for fund creation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransactionConf {
    /// Gas limit
    pub gas_limit: u64,
    /// Gas price in gwei
    pub gas_price_gwei: u64,
    /// Platform fee attached to `createFund`, in ether
    pub creation_fee: String,
    /// Send legacy (pre EIP-1559) transactions
    pub legacy: bool,
}

impl Default for TransactionConf {
    fn default() -> Self {
        Self {
            gas_limit: 3_000_000,
            gas_price_gwei: 20,
            creation_fee: "0.1".to_owned(),
            legacy: true,
        }
    }
}

impl TransactionConf {
    /// Overrides for the `createFund` send
    pub fn creation_overrides(&self) -> Result<TransactionOverrides> {
        let fee = to_wei(&self.creation_fee)
            .with_context(|| format!("invalid creation fee {:?}", self.creation_fee))?;
        Ok(TransactionOverrides {
            gas_limit: Some(U256::from(self.gas_limit)),
            gas_price: Some(U256::from(self.gas_price_gwei) * U256::exp10(9)),
            value: Some(fee),
            legacy: self.legacy,
        })
    }
}

/// Settings for the DeShare client
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Chain connection
    #[serde(default)]
    pub chain: ChainConf,
    /// Contract addresses
    pub contracts: ContractsConf,
    /// Base currency tokens
    pub currencies: CurrencyAddresses,
    /// Block explorer base url
    pub explorer_url: Url,
    /// Fund creation gas parameters
    #[serde(default)]
    pub transaction: TransactionConf,
    /// Logging
    #[serde(default)]
    pub tracing: TracingConfig,
}

impl Settings {
    /// Load settings from `./config`, `CONFIG_FILES` and the process
    /// environment.
    pub fn load() -> Result<Self> {
        let extra_files = std::env::var("CONFIG_FILES")
            .map(|s| s.split(',').map(PathBuf::from).collect::<Vec<_>>())
            .unwrap_or_default();
        let env = std::env::vars().collect::<HashMap<_, _>>();
        loader::load_settings_object(Path::new("./config"), &extra_files, env)
    }

    /// Load settings from an explicit config directory, extra files and
    /// environment map.
    pub fn load_from(
        config_dir: &Path,
        extra_files: &[PathBuf],
        env: HashMap<String, String>,
    ) -> Result<Self> {
        loader::load_settings_object(config_dir, extra_files, env)
    }

    /// Everything the workflows need besides the chain connection
    pub fn app_conf(&self) -> Result<AppConf> {
        ensure!(
            !self.contracts.platform.is_zero(),
            "contracts.platform is not set"
        );
        Ok(AppConf {
            platform: self.contracts.platform,
            fund_manager: self.contracts.fund_manager,
            currencies: self.currencies,
            explorer: Explorer::new(&self.explorer_url),
            creation_overrides: self.transaction.creation_overrides()?,
        })
    }

    /// Connect to the configured chain. `None` when no endpoint is
    /// configured, i.e. there is no wallet provider.
    pub async fn build_connection(&self) -> Result<Option<ChainConnection>> {
        let Some(url) = self.chain.url.clone() else {
            return Ok(None);
        };
        let conn = ConnectionConf {
            url,
            confirmation_timeout: Duration::from_secs(self.chain.confirmation_timeout_secs),
        };
        let signer = self
            .chain
            .signer
            .as_ref()
            .map(SignerConf::build)
            .transpose()?
            .flatten();
        let builder = ConnectionBuilder {
            legacy: self.transaction.legacy,
        };
        let connection = builder
            .build_with_connection_conf(&conn, signer)
            .await
            .with_context(|| format!("failed to connect to {}", conn.url))?;
        Ok(Some(ChainConnection {
            gateway: connection.gateway,
            wallet: connection.wallet,
        }))
    }
}
