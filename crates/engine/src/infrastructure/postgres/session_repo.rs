//! Postgres session repository implementation.

use async_trait::async_trait;
use dungeonmaster_domain::{LocationId, Session, SessionId};
use sqlx::postgres::PgRow;

use super::helpers::{query_error, release, PgConnector, RowExt};
use crate::infrastructure::ports::{RepoError, SessionRepo};

const OPERATION: &str = "session.get";

/// Reads play-through sessions from the `sessions` table.
pub struct PgSessionRepo {
    connector: PgConnector,
}

impl PgSessionRepo {
    pub fn new(connector: PgConnector) -> Self {
        Self { connector }
    }

    fn row_to_session(row: &PgRow) -> Result<Session, RepoError> {
        let id: i64 = row.column("Session", "id")?;
        let location_id: i64 = row.column("Session", "location_id")?;
        let time_of_day: Option<String> = row.column("Session", "time_of_day")?;

        Ok(Session {
            id: SessionId::from_storage(id),
            location_id: LocationId::from_storage(location_id),
            time_of_day,
        })
    }
}

#[async_trait]
impl SessionRepo for PgSessionRepo {
    async fn get(&self, id: SessionId) -> Result<Option<Session>, RepoError> {
        let mut conn = self.connector.connect(OPERATION).await?;

        let row = sqlx::query(
            r#"
            SELECT id::BIGINT AS id,
                   location_id::BIGINT AS location_id,
                   time_of_day::TEXT AS time_of_day
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&mut conn)
        .await;

        release(conn, OPERATION).await;

        match row.map_err(|e| query_error(OPERATION, "Session", e))? {
            Some(row) => Self::row_to_session(&row).map(Some),
            None => Ok(None),
        }
    }
}
