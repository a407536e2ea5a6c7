//! Assemble location use case.
//!
//! Loads a location row and attaches every connection that touches it,
//! whichever end the location sits on.

use std::collections::HashSet;
use std::sync::Arc;

use dungeonmaster_domain::{AssembledLocation, Exit, LocationId};

use crate::infrastructure::ports::{LocationRepo, RepoError};

/// Build the denormalized location record (base fields + exits).
pub struct AssembleLocation {
    location_repo: Arc<dyn LocationRepo>,
}

impl AssembleLocation {
    pub fn new(location_repo: Arc<dyn LocationRepo>) -> Self {
        Self { location_repo }
    }

    /// # Returns
    /// * `Ok(AssembledLocation::Found)` - Location with its exits (possibly none)
    /// * `Ok(AssembledLocation::Empty)` - No such location; exits were not queried
    /// * `Err(RepoError)` - Storage unreachable or row malformed
    pub async fn execute(&self, location_id: LocationId) -> Result<AssembledLocation, RepoError> {
        let Some(location) = self.location_repo.get_location(location_id).await? else {
            tracing::info!(location_id = %location_id, "Location not found");
            return Ok(AssembledLocation::Empty);
        };

        let exits = dedupe_exits(self.location_repo.get_location_exits(location.id).await?);

        tracing::debug!(
            location_id = %location.id,
            exit_count = exits.len(),
            "Assembled location"
        );

        Ok(AssembledLocation::Found(location.with_exits(exits)))
    }
}

/// Drop repeated connections while keeping storage order.
fn dedupe_exits(exits: Vec<Exit>) -> Vec<Exit> {
    let mut seen = HashSet::new();
    exits.into_iter().filter(|exit| seen.insert(exit.id)).collect()
}
