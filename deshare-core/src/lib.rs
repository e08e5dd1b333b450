//! This crate contains core primitives, traits, and types shared by the
//! DeShare fund client: the contract proxies, the wallet provider boundary and
//! the display surface the workflows drive.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![forbid(unsafe_code)]

pub use ethers_core::types::{H160, H256, U256};

/// Error types for chain interaction
mod error;
pub use error::*;

/// Async traits for contract proxies, wallet providers and display surfaces
pub mod traits;
pub use traits::*;

/// Core data structures
pub mod types;
pub use types::*;
