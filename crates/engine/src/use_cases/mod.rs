//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod location;
pub mod narration;
pub mod session;

pub use location::AssembleLocation;
pub use narration::{
    BuildNarrationRequest, DescribeSession, NarrateScene, Narration, NarrationError,
    NarrationPayload, NarrationUseCases,
};
pub use session::ResolveSession;
