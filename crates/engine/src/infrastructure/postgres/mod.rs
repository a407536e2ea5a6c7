//! Postgres database implementations.

use std::sync::Arc;

mod helpers;

mod location_repo;
mod session_repo;


pub use helpers::PgConnector;
pub use location_repo::PgLocationRepo;
pub use session_repo::PgSessionRepo;

/// Create all Postgres repositories for one database.
pub struct PostgresRepositories {
    pub session: Arc<PgSessionRepo>,
    pub location: Arc<PgLocationRepo>,
}

impl PostgresRepositories {
    pub fn new(database_url: &str) -> Self {
        let connector = PgConnector::new(database_url);
        Self {
            session: Arc::new(PgSessionRepo::new(connector.clone())),
            location: Arc::new(PgLocationRepo::new(connector)),
        }
    }
}
