//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod openai;
pub mod ports;
pub mod postgres;
pub mod settings;
