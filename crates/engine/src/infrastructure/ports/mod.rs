//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (Postgres today, anything relational tomorrow)
//! - LLM calls (any OpenAI-compatible endpoint)

mod error;
mod external;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{LocationRepo, SessionRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockLlmPort;
#[cfg(test)]
pub use repos::{MockLocationRepo, MockSessionRepo};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{LlmError, RepoError};
