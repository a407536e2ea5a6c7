//! Location use cases.

mod assemble;

pub use assemble::AssembleLocation;
