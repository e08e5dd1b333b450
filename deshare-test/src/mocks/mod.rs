pub use display::RecordingDisplay;
pub use fund::{DelayedFund, MockFund, MockFundPlatform};
pub use gateway::MockGateway;
pub use token::MockErc20;
pub use wallet::MockWalletProvider;

mod display;
mod fund;
mod gateway;
mod token;
mod wallet;
