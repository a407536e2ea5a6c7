//! Describe session use case.
//!
//! The full pipeline: build the narration payload for a session and, when
//! there is one, narrate it.

use std::sync::Arc;

use dungeonmaster_domain::{LocationId, SessionId};

use super::{BuildNarrationRequest, NarrateScene, NarrationError};

/// Narration for the location a session currently occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub session_id: SessionId,
    pub location_id: LocationId,
    pub text: String,
}

pub struct DescribeSession {
    build_request: Arc<BuildNarrationRequest>,
    narrate: Arc<NarrateScene>,
}

impl DescribeSession {
    pub fn new(build_request: Arc<BuildNarrationRequest>, narrate: Arc<NarrateScene>) -> Self {
        Self {
            build_request,
            narrate,
        }
    }

    /// # Returns
    /// * `Ok(Some(Narration))` - Generated narration
    /// * `Ok(None)` - Session or location missing; the LLM was not called
    /// * `Err(NarrationError)` - Storage, serialization or generation failure
    pub async fn execute(&self, session_id: SessionId) -> Result<Option<Narration>, NarrationError> {
        let Some(payload) = self.build_request.execute(session_id).await? else {
            return Ok(None);
        };

        let text = self.narrate.execute(&payload).await?;

        Ok(Some(Narration {
            session_id,
            location_id: payload.request.id,
            text,
        }))
    }
}
