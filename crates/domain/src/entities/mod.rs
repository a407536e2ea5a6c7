//! Domain entities read from the game-world store.

mod exit;
mod location;
mod session;

pub use exit::Exit;
pub use location::{AssembledLocation, Location};
pub use session::Session;
