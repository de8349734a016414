//! Repository error types
//!
//! Every storage backend reports failures as a [`RepositoryError`], so the
//! handler layer can decide how a fault surfaces without knowing which
//! backend produced it.
//!
//! # Example
//!
//! ```rust
//! use trivia_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::connection_failed("connection refused")
//!     .with_operation(RepositoryOperation::Delete);
//! assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
//! assert_eq!(error.operation, RepositoryOperation::Delete);
//! assert!(error.is_retriable());
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Finding a single entity by ID
    FindById,
    /// Scanning entities with a filter
    FindAll,
    /// Inserting a new entity
    Create,
    /// Deleting an entity
    Delete,
    /// Checking that the backend answers
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindById => write!(f, "find_by_id"),
            Self::FindAll => write!(f, "find_all"),
            Self::Create => write!(f, "create"),
            Self::Delete => write!(f, "delete"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Entity was not found
    NotFound,
    /// Database constraint violation
    ConstraintViolation,
    /// Failed to reach the backend
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Underlying database error
    DatabaseError,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Question")
    pub entity_type: Option<String>,
    /// The ID of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::Ping,
            RepositoryErrorKind::ConnectionFailed,
            message,
        )
    }

    pub fn timeout(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Timeout, message)
    }

    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Transient failures that may succeed if the caller tries again
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::Error as E;
        match err {
            E::RowNotFound => Self::new(
                RepositoryOperation::FindById,
                RepositoryErrorKind::NotFound,
                "Row not found",
            ),
            E::PoolTimedOut => Self::timeout(
                RepositoryOperation::FindAll,
                "Connection pool timed out",
            ),
            E::PoolClosed | E::WorkerCrashed => {
                Self::connection_failed("Connection pool is unavailable")
            }
            E::Io(e) => Self::connection_failed(e.to_string()),
            E::Tls(e) => Self::connection_failed(format!("TLS error: {}", e)),
            E::Database(db_err) => {
                let kind = if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation()
                {
                    RepositoryErrorKind::ConstraintViolation
                } else {
                    RepositoryErrorKind::DatabaseError
                };
                Self::new(RepositoryOperation::FindAll, kind, db_err.to_string())
            }
            other => Self::new(
                RepositoryOperation::FindAll,
                RepositoryErrorKind::Other,
                other.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_operation_display() {
        assert_eq!(format!("{}", RepositoryOperation::FindById), "find_by_id");
        assert_eq!(format!("{}", RepositoryOperation::FindAll), "find_all");
        assert_eq!(format!("{}", RepositoryOperation::Create), "create");
        assert_eq!(format!("{}", RepositoryOperation::Delete), "delete");
        assert_eq!(format!("{}", RepositoryOperation::Ping), "ping");
    }

    #[test]
    fn test_with_entity() {
        let error = RepositoryError::connection_failed("refused").with_entity("Question", "12");
        assert_eq!(error.entity_type, Some("Question".to_string()));
        assert_eq!(error.entity_id, Some("12".to_string()));
    }

    #[test]
    fn test_with_operation() {
        let error = RepositoryError::connection_failed("refused")
            .with_operation(RepositoryOperation::Delete);
        assert_eq!(error.operation, RepositoryOperation::Delete);
        assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
    }

    #[test]
    fn test_is_retriable() {
        assert!(RepositoryError::connection_failed("refused").is_retriable());
        assert!(RepositoryError::timeout(RepositoryOperation::FindAll, "slow").is_retriable());
        assert!(!RepositoryError::new(
            RepositoryOperation::Create,
            RepositoryErrorKind::ConstraintViolation,
            "duplicate key"
        )
        .is_retriable());
    }

    #[test]
    fn test_display_with_entity() {
        let display = RepositoryError::new(
            RepositoryOperation::FindById,
            RepositoryErrorKind::NotFound,
            "Row not found",
        )
        .with_entity("Question", "12")
        .to_string();
        assert!(display.contains("not_found"));
        assert!(display.contains("find_by_id"));
        assert!(display.contains("[Question: 12]"));
    }

    #[test]
    fn test_display_without_entity() {
        let display = RepositoryError::new(
            RepositoryOperation::Delete,
            RepositoryErrorKind::DatabaseError,
            "disk full",
        )
        .to_string();
        assert_eq!(
            display,
            "Repository database_error error during delete: disk full"
        );
    }
}
