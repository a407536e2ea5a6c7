//! Exit entity - a traversable link between two locations

use serde::{Deserialize, Serialize};

use crate::{ConnectionId, LocationId};

/// A connection between two locations as stored in the `connections` table.
///
/// A single exit shows up in the assembled exit list of both endpoints, so the
/// start/end fields are kept exactly as stored rather than re-oriented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub id: ConnectionId,
    pub start_location_id: LocationId,
    pub end_location_id: LocationId,
    /// Internal label for the exit. Never shown to players.
    pub name: String,
    /// Player-facing description of the path/transition
    pub description: Option<String>,
    /// Free-form kind of exit (door, stairs, trail, ...)
    pub category: Option<String>,
    /// Whether the exit can only be traversed from start to end
    pub is_one_way: bool,
    pub is_fast_travel_path: bool,
    /// Whether narration should include the end location's exterior
    pub describe_end_location_exterior: bool,
}

impl Exit {
    pub fn new(
        id: ConnectionId,
        start_location_id: LocationId,
        end_location_id: LocationId,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            start_location_id,
            end_location_id,
            name: name.into(),
            description: None,
            category: None,
            is_one_way: false,
            is_fast_travel_path: false,
            describe_end_location_exterior: false,
        }
    }

    // Builder methods

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn one_way(mut self) -> Self {
        self.is_one_way = true;
        self
    }

    pub fn describing_end_exterior(mut self) -> Self {
        self.describe_end_location_exterior = true;
        self
    }
}
