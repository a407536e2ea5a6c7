//! Postgres location repository implementation.
//!
//! Handles the base `locations` row and the `connections` rows touching it.

use async_trait::async_trait;
use dungeonmaster_domain::{ConnectionId, Exit, Location, LocationId};
use sqlx::postgres::PgRow;

use super::helpers::{query_error, release, PgConnector, RowExt};
use crate::infrastructure::ports::{LocationRepo, RepoError};

/// Repository for Location and exit reads.
pub struct PgLocationRepo {
    connector: PgConnector,
}

impl PgLocationRepo {
    pub fn new(connector: PgConnector) -> Self {
        Self { connector }
    }

    fn row_to_location(row: &PgRow) -> Result<Location, RepoError> {
        let id: i64 = row.column("Location", "id")?;
        let starting_location_id: Option<i64> = row.column("Location", "starting_location_id")?;
        let parent_id: Option<i64> = row.column("Location", "parent_id")?;

        Ok(Location {
            id: LocationId::from_storage(id),
            starting_location_id: starting_location_id.map(LocationId::from_storage),
            parent_id: parent_id.map(LocationId::from_storage),
            name: row.column("Location", "name")?,
            category: row.column("Location", "category")?,
            interior_description: row.column("Location", "interior_description")?,
            exterior_description: row.column("Location", "exterior_description")?,
            notes: row.column("Location", "notes")?,
            exits: Vec::new(),
        })
    }

    fn row_to_exit(row: &PgRow) -> Result<Exit, RepoError> {
        let id: i64 = row.column("Exit", "id")?;
        let start_location_id: i64 = row.column("Exit", "start_location_id")?;
        let end_location_id: i64 = row.column("Exit", "end_location_id")?;

        Ok(Exit {
            id: ConnectionId::from_storage(id),
            start_location_id: LocationId::from_storage(start_location_id),
            end_location_id: LocationId::from_storage(end_location_id),
            name: row.column("Exit", "name")?,
            description: row.column("Exit", "description")?,
            category: row.column("Exit", "category")?,
            is_one_way: row.column("Exit", "is_one_way")?,
            is_fast_travel_path: row.column("Exit", "is_fast_travel_path")?,
            describe_end_location_exterior: row
                .column("Exit", "describe_end_location_exterior")?,
        })
    }
}

#[async_trait]
impl LocationRepo for PgLocationRepo {
    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, RepoError> {
        const OPERATION: &str = "location.get";
        let mut conn = self.connector.connect(OPERATION).await?;

        let row = sqlx::query(
            r#"
            SELECT id::BIGINT AS id,
                   starting_location_id::BIGINT AS starting_location_id,
                   parent_id::BIGINT AS parent_id,
                   name::TEXT AS name,
                   category::TEXT AS category,
                   interior_description::TEXT AS interior_description,
                   exterior_description::TEXT AS exterior_description,
                   notes::TEXT AS notes
            FROM locations
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&mut conn)
        .await;

        release(conn, OPERATION).await;

        match row.map_err(|e| query_error(OPERATION, "Location", e))? {
            Some(row) => Self::row_to_location(&row).map(Some),
            None => Ok(None),
        }
    }

    async fn get_location_exits(&self, id: LocationId) -> Result<Vec<Exit>, RepoError> {
        const OPERATION: &str = "location.exits";
        let mut conn = self.connector.connect(OPERATION).await?;

        // No ORDER BY: exits come back in whatever order storage yields them.
        let rows = sqlx::query(
            r#"
            SELECT id::BIGINT AS id,
                   start_location_id::BIGINT AS start_location_id,
                   end_location_id::BIGINT AS end_location_id,
                   name::TEXT AS name,
                   description::TEXT AS description,
                   category::TEXT AS category,
                   is_one_way,
                   is_fast_travel_path,
                   describe_end_location_exterior
            FROM connections
            WHERE start_location_id = $1 OR end_location_id = $1
            "#,
        )
        .bind(id.get())
        .fetch_all(&mut conn)
        .await;

        release(conn, OPERATION).await;

        rows.map_err(|e| query_error(OPERATION, "Exit", e))?
            .iter()
            .map(Self::row_to_exit)
            .collect()
    }
}
