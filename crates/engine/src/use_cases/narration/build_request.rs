//! Build narration request use case.
//!
//! Session id -> session -> assembled location -> merged, serialized payload.
//! Any missing link short-circuits to `None` without touching later stages.

use std::sync::Arc;

use dungeonmaster_domain::{AssembledLocation, NarrationRequest, SessionId};

use super::NarrationError;
use crate::use_cases::location::AssembleLocation;
use crate::use_cases::session::ResolveSession;

/// The merged record plus its wire form.
#[derive(Debug, Clone)]
pub struct NarrationPayload {
    pub request: NarrationRequest,
    /// JSON text sent as the user message
    pub json: String,
}

impl NarrationPayload {
    pub fn new(request: NarrationRequest) -> Result<Self, NarrationError> {
        let json = serde_json::to_string(&request)
            .map_err(|e| NarrationError::Serialization(e.to_string()))?;
        Ok(Self { request, json })
    }
}

/// Merge a session's time of day into its current location.
pub struct BuildNarrationRequest {
    resolve_session: Arc<ResolveSession>,
    assemble_location: Arc<AssembleLocation>,
}

impl BuildNarrationRequest {
    pub fn new(
        resolve_session: Arc<ResolveSession>,
        assemble_location: Arc<AssembleLocation>,
    ) -> Self {
        Self {
            resolve_session,
            assemble_location,
        }
    }

    /// # Returns
    /// * `Ok(Some(NarrationPayload))` - Session and location both found
    /// * `Ok(None)` - Session missing, or its location missing
    /// * `Err(NarrationError)` - Storage or serialization failure
    pub async fn execute(
        &self,
        session_id: SessionId,
    ) -> Result<Option<NarrationPayload>, NarrationError> {
        let Some(session) = self.resolve_session.execute(session_id).await? else {
            return Ok(None);
        };

        let location = match self.assemble_location.execute(session.location_id).await? {
            AssembledLocation::Found(location) => location,
            AssembledLocation::Empty => {
                tracing::warn!(
                    session_id = %session_id,
                    location_id = %session.location_id,
                    "Session points at a location that does not exist"
                );
                return Ok(None);
            }
        };

        let payload = NarrationPayload::new(NarrationRequest::new(location, session.time_of_day))?;

        tracing::debug!(
            session_id = %session_id,
            location_id = %payload.request.id,
            payload_bytes = payload.json.len(),
            "Built narration payload"
        );

        Ok(Some(payload))
    }
}
