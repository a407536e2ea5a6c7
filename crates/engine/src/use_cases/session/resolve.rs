//! Resolve session use case.
//!
//! Maps a session id to the party's current location and time of day.

use std::sync::Arc;

use dungeonmaster_domain::{Session, SessionId};

use crate::infrastructure::ports::{RepoError, SessionRepo};

/// Look up where a play-through currently stands.
pub struct ResolveSession {
    session_repo: Arc<dyn SessionRepo>,
}

impl ResolveSession {
    pub fn new(session_repo: Arc<dyn SessionRepo>) -> Self {
        Self { session_repo }
    }

    /// # Returns
    /// * `Ok(Some(Session))` - The session exists
    /// * `Ok(None)` - No session with this id (not an error; callers cannot proceed)
    /// * `Err(RepoError)` - Storage unreachable or row malformed
    pub async fn execute(&self, session_id: SessionId) -> Result<Option<Session>, RepoError> {
        let session = self.session_repo.get(session_id).await?;

        match &session {
            Some(s) => tracing::debug!(
                session_id = %session_id,
                location_id = %s.location_id,
                time_of_day = ?s.time_of_day,
                "Resolved session"
            ),
            None => tracing::info!(session_id = %session_id, "Session not found"),
        }

        Ok(session)
    }
}
