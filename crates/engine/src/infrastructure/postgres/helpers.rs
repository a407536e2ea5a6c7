//! Postgres helpers for connection scoping and row conversion.
//!
//! Every repository call opens its own connection, runs its query and hands
//! the connection back to [`release`] whatever the query outcome was. Rows are
//! read by column name so a reordered or widened table cannot shift fields.

use sqlx::postgres::{PgConnection, PgRow, Postgres};
use sqlx::{Connection, Decode, Row, Type};

use crate::infrastructure::ports::RepoError;

// =============================================================================
// Connection Scoping
// =============================================================================

/// Opens short-lived connections to a single database.
#[derive(Debug, Clone)]
pub struct PgConnector {
    database_url: String,
}

impl PgConnector {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Open a fresh connection for one repository operation.
    pub async fn connect(&self, operation: &'static str) -> Result<PgConnection, RepoError> {
        PgConnection::connect(&self.database_url)
            .await
            .map_err(|e| RepoError::database(operation, e))
    }
}

/// Close a connection after use. Close failures are logged, not propagated:
/// the query result is already decided by then.
pub async fn release(conn: PgConnection, operation: &'static str) {
    if let Err(e) = conn.close().await {
        tracing::warn!(operation, error = %e, "Failed to close database connection cleanly");
    }
}

// =============================================================================
// Query Error Mapping
// =============================================================================

/// SQLSTATE for a column named in the query that the table lacks.
const UNDEFINED_COLUMN: &str = "42703";
/// SQLSTATE for a table named in the query that does not exist.
const UNDEFINED_TABLE: &str = "42P01";

/// Map a failed query. A query rejected because the schema no longer has the
/// columns or tables it names is schema drift, not an outage.
pub fn query_error(
    operation: &'static str,
    entity_type: &'static str,
    error: sqlx::Error,
) -> RepoError {
    let code = match &error {
        sqlx::Error::Database(db) => db.code().map(|code| code.into_owned()),
        _ => None,
    };

    if is_schema_drift(code.as_deref()) {
        RepoError::schema(entity_type, error)
    } else {
        RepoError::database(operation, error)
    }
}

fn is_schema_drift(sqlstate: Option<&str>) -> bool {
    matches!(sqlstate, Some(UNDEFINED_COLUMN | UNDEFINED_TABLE))
}

// =============================================================================
// Row Extension Trait (Error Mapping)
// =============================================================================

/// Extension trait for Postgres rows with standardized error mapping.
///
/// Missing columns and type mismatches become `RepoError::Schema`:
/// ```ignore
/// let name: String = row.column("Location", "name")?;
/// ```
pub trait RowExt {
    fn column<'r, T>(&'r self, entity_type: &'static str, name: &str) -> Result<T, RepoError>
    where
        T: Decode<'r, Postgres> + Type<Postgres>;
}

impl RowExt for PgRow {
    fn column<'r, T>(&'r self, entity_type: &'static str, name: &str) -> Result<T, RepoError>
    where
        T: Decode<'r, Postgres> + Type<Postgres>,
    {
        self.try_get(name)
            .map_err(|e| RepoError::schema(entity_type, e))
    }
}
