//! Dungeonmaster domain types.
//!
//! Plain data read from the game-world store (sessions, locations, exits) and
//! the narration payload derived from them. No I/O lives here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{AssembledLocation, Exit, Location, Session};
pub use error::DomainError;
pub use ids::{ConnectionId, LocationId, SessionId};
pub use value_objects::{NarrationExit, NarrationRequest};
