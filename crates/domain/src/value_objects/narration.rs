//! Narration payload - a location merged with the session's time of day
//!
//! This is what gets serialized and handed to the language model. It keeps
//! every field of [`Location`] plus `time_of_day`, with one deliberate gap:
//! exit names are withheld from the serialized form so the model cannot echo
//! them. The withheld names stay available through
//! [`NarrationRequest::withheld_exit_names`] for checking generated text.

use serde::Serialize;

use crate::{ConnectionId, Exit, Location, LocationId};

/// An exit as the narrator sees it (no name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationExit {
    pub id: ConnectionId,
    pub start_location_id: LocationId,
    pub end_location_id: LocationId,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_one_way: bool,
    pub is_fast_travel_path: bool,
    pub describe_end_location_exterior: bool,
}

impl From<&Exit> for NarrationExit {
    fn from(exit: &Exit) -> Self {
        Self {
            id: exit.id,
            start_location_id: exit.start_location_id,
            end_location_id: exit.end_location_id,
            description: exit.description.clone(),
            category: exit.category.clone(),
            is_one_way: exit.is_one_way,
            is_fast_travel_path: exit.is_fast_travel_path,
            describe_end_location_exterior: exit.describe_end_location_exterior,
        }
    }
}

/// The merged session + location record sent to the narrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationRequest {
    pub id: LocationId,
    pub starting_location_id: Option<LocationId>,
    pub parent_id: Option<LocationId>,
    pub name: String,
    pub category: Option<String>,
    pub interior_description: Option<String>,
    pub exterior_description: Option<String>,
    pub notes: Option<String>,
    pub exits: Vec<NarrationExit>,
    pub time_of_day: Option<String>,
    #[serde(skip)]
    withheld_exit_names: Vec<String>,
}

impl NarrationRequest {
    /// Merge a found location with the session's time of day.
    pub fn new(location: Location, time_of_day: Option<String>) -> Self {
        let exits = location.exits.iter().map(NarrationExit::from).collect();
        let withheld_exit_names = location
            .exits
            .into_iter()
            .map(|exit| exit.name)
            .filter(|name| !name.trim().is_empty())
            .collect();

        Self {
            id: location.id,
            starting_location_id: location.starting_location_id,
            parent_id: location.parent_id,
            name: location.name,
            category: location.category,
            interior_description: location.interior_description,
            exterior_description: location.exterior_description,
            notes: location.notes,
            exits,
            time_of_day,
            withheld_exit_names,
        }
    }

    /// Exit names that were stripped from the payload.
    pub fn withheld_exit_names(&self) -> &[String] {
        &self.withheld_exit_names
    }
}
