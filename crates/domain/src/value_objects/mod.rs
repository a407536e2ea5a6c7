//! Value objects built from domain entities.

mod narration;

pub use narration::{NarrationExit, NarrationRequest};
