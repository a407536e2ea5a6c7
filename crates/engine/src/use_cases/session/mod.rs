//! Session use cases.

mod resolve;

pub use resolve::ResolveSession;
