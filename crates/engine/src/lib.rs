//! Dungeonmaster Engine library.
//!
//! Reads a play-through's current location from the game-world database and
//! asks a language model to narrate it.
//!
//! ## Structure
//!
//! - `use_cases/` - Pipeline stages (resolve session, assemble location, narrate)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

/// Test fixtures shared by use case tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
