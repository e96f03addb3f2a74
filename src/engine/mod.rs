pub mod difficulty;
pub mod filter;
pub mod keyboard;
pub mod ledger;
pub mod scoring;
pub mod selection;
pub mod session;

pub use filter::FilterMode;
pub use session::{Effect, GameSession, GameStatus};
