//! Narration use cases.
//!
//! `BuildNarrationRequest` merges a session with its assembled location,
//! `NarrateScene` turns that payload into prose, and `DescribeSession` runs
//! both in sequence.

mod build_request;
mod describe_session;
mod narrate;

pub use build_request::{BuildNarrationRequest, NarrationPayload};
pub use describe_session::{DescribeSession, Narration};
pub use narrate::{
    scrub_exit_names, NarrateScene, EXIT_NAME_REPLACEMENTS, NARRATION_FREQUENCY_PENALTY,
    NARRATION_MAX_TOKENS, NARRATION_PRESENCE_PENALTY, NARRATION_TEMPERATURE, NARRATION_TOP_P,
};

use std::sync::Arc;

use crate::infrastructure::ports::{LlmError, RepoError};

/// Container for narration use cases.
pub struct NarrationUseCases {
    pub build_request: Arc<BuildNarrationRequest>,
    pub narrate: Arc<NarrateScene>,
    pub describe_session: Arc<DescribeSession>,
}

impl NarrationUseCases {
    pub fn new(
        build_request: Arc<BuildNarrationRequest>,
        narrate: Arc<NarrateScene>,
        describe_session: Arc<DescribeSession>,
    ) -> Self {
        Self {
            build_request,
            narrate,
            describe_session,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),
    #[error("Failed to serialize narration payload: {0}")]
    Serialization(String),
}
