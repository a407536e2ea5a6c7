//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database unreachable or query failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A row did not have the shape the mapping expects (missing column,
    /// unexpected type). Raised instead of silently dropping fields.
    #[error("Schema error reading {entity_type}: {message}")]
    Schema {
        entity_type: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Schema error for the given entity type.
    pub fn schema(entity_type: &'static str, message: impl ToString) -> Self {
        Self::Schema {
            entity_type,
            message: message.to_string(),
        }
    }
}

/// Completion service failures. No retry is attempted for either variant.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_keeps_operation() {
        let error = RepoError::database("session.get", "connection refused");

        match error {
            RepoError::Database { operation, message } => {
                assert_eq!(operation, "session.get");
                assert_eq!(message, "connection refused");
            }
            _ => panic!("Expected Database variant"),
        }
    }

    #[test]
    fn schema_error_names_entity() {
        let error = RepoError::schema("Location", "no column found for name \"notes\"");

        assert!(matches!(error, RepoError::Schema { entity_type: "Location", .. }));
        assert!(error.to_string().contains("Location"));
        assert!(error.to_string().contains("notes"));
    }
}
