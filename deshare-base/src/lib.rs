//! Configuration, logging and the user-facing workflows of the DeShare fund
//! client: wallet connection, seed-funding approval, fund creation and the
//! fund listing.

// Forbid unsafe code outside of tests
#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(missing_docs)]

pub mod settings;

mod app;
pub use app::*;

/// Display surfaces
pub mod display;

mod explorer;
pub use explorer::*;

mod session;
pub use session::*;

mod workflow;
pub use workflow::*;
