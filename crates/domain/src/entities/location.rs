//! Location entity - places in the game world

use serde::{Deserialize, Serialize};

use super::Exit;
use crate::LocationId;

/// A location row together with every connection that touches it.
///
/// `exits` is filled in after the base row is loaded and is empty (never
/// missing) when no connection references the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Where a party is placed when first entering this location, if set
    pub starting_location_id: Option<LocationId>,
    /// Containing location (a room's building, a building's town)
    pub parent_id: Option<LocationId>,
    pub name: String,
    pub category: Option<String>,
    pub interior_description: Option<String>,
    pub exterior_description: Option<String>,
    /// GM-only guidance. Shapes narration but is never quoted.
    pub notes: Option<String>,
    #[serde(default)]
    pub exits: Vec<Exit>,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            starting_location_id: None,
            parent_id: None,
            name: name.into(),
            category: None,
            interior_description: None,
            exterior_description: None,
            notes: None,
            exits: Vec::new(),
        }
    }

    pub fn with_interior_description(mut self, text: impl Into<String>) -> Self {
        self.interior_description = Some(text.into());
        self
    }

    pub fn with_exterior_description(mut self, text: impl Into<String>) -> Self {
        self.exterior_description = Some(text.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_parent(mut self, parent_id: LocationId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Attach the exit list, replacing whatever was there.
    pub fn with_exits(mut self, exits: Vec<Exit>) -> Self {
        self.exits = exits;
        self
    }
}

/// Outcome of assembling a location.
///
/// `Empty` stands in for "no location with that id"; it carries no exits
/// because the exit lookup is never attempted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembledLocation {
    Found(Location),
    Empty,
}

impl AssembledLocation {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn into_location(self) -> Option<Location> {
        match self {
            Self::Found(location) => Some(location),
            Self::Empty => None,
        }
    }
}

impl From<Option<Location>> for AssembledLocation {
    fn from(value: Option<Location>) -> Self {
        value.map_or(Self::Empty, Self::Found)
    }
}
