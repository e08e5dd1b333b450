//! Interfaces to the DeShare ethereum contracts

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

use std::time::Duration;

use ethers::abi::{Abi, FunctionExt};
use url::Url;

use deshare_core::{ContractHandle, H160};

pub use crate::{fund::*, gateway::*, platform::*, token::*, trait_builder::*, wallet::*};

mod tx;

/// Fund abi
mod fund;

/// Contract gateway over one middleware
mod gateway;

/// FundPlatform abi
mod platform;

/// Erc20 abi
mod token;

mod trait_builder;

/// Wallet provider backed by the node or a local signer
mod wallet;

/// Generated contract bindings.
mod contracts;

/// Default time to wait for a transaction to be mined
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Ethereum connection configuration
#[derive(Debug, Clone)]
pub struct ConnectionConf {
    /// Fully qualified JSON-RPC url to connect to
    pub url: Url,
    /// How long to wait for a broadcast transaction to be mined
    pub confirmation_timeout: Duration,
}

impl ConnectionConf {
    /// Connection to `url` with the default confirmation timeout
    pub fn new(url: Url) -> Self {
        Self {
            url,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
        }
    }
}

fn contract_handle(address: H160, abi: &Abi) -> ContractHandle {
    ContractHandle::new(address, abi.functions().map(|f| f.abi_signature()).collect())
}
