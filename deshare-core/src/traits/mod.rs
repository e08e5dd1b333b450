pub use deployed::*;
pub use display::*;
pub use fund::*;
pub use gateway::*;
pub use pending::*;
pub use token::*;
pub use wallet::*;

mod deployed;
mod display;
mod fund;
mod gateway;
mod pending;
mod token;
mod wallet;
