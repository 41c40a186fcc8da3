/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Machine-checkable classification of a domain failure.
///
/// Attached where the failure is raised so callers never have to inspect
/// message text to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input field.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// Caller lacks the role or relationship required for the target.
    Authorization,
    /// Uniqueness violation.
    Conflict,
    /// Storage or other infrastructure failure.
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::NotFound => write!(f, "not-found"),
            ErrorKind::Authorization => write!(f, "authorization"),
            ErrorKind::Conflict => write!(f, "conflict"),
            ErrorKind::Internal => write!(f, "internal"),
        }
    }
}
