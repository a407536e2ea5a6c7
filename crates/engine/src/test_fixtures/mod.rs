//! Shared fixtures for use case tests.
//!
//! Models a tiny world: session 1 stands in the study (location 10) at dusk.
//! The study has a two-way door north to the hallway (11) and a one-way chute
//! arriving from the cellar (12).

use dungeonmaster_domain::{ConnectionId, Exit, Location, LocationId, Session, SessionId};

pub const STUDY_INTERIOR: &str = "A cramped study lined with dusty tomes.";
pub const NORTH_DOOR_NAME: &str = "North Door";
pub const NORTH_DOOR_DESCRIPTION: &str = "A heavy oak door with iron bands.";
pub const CHUTE_NAME: &str = "Cellar Chute";

pub fn session_id() -> SessionId {
    SessionId::from_storage(1)
}

pub fn study_id() -> LocationId {
    LocationId::from_storage(10)
}

pub fn hallway_id() -> LocationId {
    LocationId::from_storage(11)
}

pub fn cellar_id() -> LocationId {
    LocationId::from_storage(12)
}

pub fn dusk_session() -> Session {
    Session::new(session_id(), study_id()).with_time_of_day("dusk")
}

/// Base row for the study, as the repository returns it (no exits yet).
pub fn study() -> Location {
    Location::new(study_id(), "Study")
        .with_category("room")
        .with_interior_description(STUDY_INTERIOR)
        .with_exterior_description("A squat stone tower.")
        .with_notes("The desk hides a ledger.")
}

pub fn north_door() -> Exit {
    Exit::new(
        ConnectionId::from_storage(1),
        study_id(),
        hallway_id(),
        NORTH_DOOR_NAME,
    )
    .with_description(NORTH_DOOR_DESCRIPTION)
    .with_category("door")
}

pub fn cellar_chute() -> Exit {
    Exit::new(
        ConnectionId::from_storage(2),
        cellar_id(),
        study_id(),
        CHUTE_NAME,
    )
    .with_description("A narrow chute climbing up from below.")
    .one_way()
    .describing_end_exterior()
}
