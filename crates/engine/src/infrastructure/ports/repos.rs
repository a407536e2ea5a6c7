//! Repository port traits (read-only access to the game-world store).

use async_trait::async_trait;
use dungeonmaster_domain::{Exit, Location, LocationId, Session, SessionId};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepo: Send + Sync {
    /// `Ok(None)` when no session has this id.
    async fn get(&self, id: SessionId) -> Result<Option<Session>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepo: Send + Sync {
    /// Base location row only; `exits` is left empty.
    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, RepoError>;

    /// Every connection where `id` is the start or the end point, in storage order.
    async fn get_location_exits(&self, id: LocationId) -> Result<Vec<Exit>, RepoError>;
}
