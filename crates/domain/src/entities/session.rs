//! Session entity - a play-through's current position

use serde::{Deserialize, Serialize};

use crate::{LocationId, SessionId};

/// Read-only snapshot of where a play-through currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// The location the party currently occupies
    pub location_id: LocationId,
    /// Free-form time of day ("dusk", "midnight", ...); absent when untracked
    pub time_of_day: Option<String>,
}

impl Session {
    pub fn new(id: SessionId, location_id: LocationId) -> Self {
        Self {
            id,
            location_id,
            time_of_day: None,
        }
    }

    pub fn with_time_of_day(mut self, time_of_day: impl Into<String>) -> Self {
        self.time_of_day = Some(time_of_day.into());
        self
    }
}
