use business::domain::errors::RepositoryError;

/// Translates a sqlx failure into the domain's repository error.
///
/// Unique-constraint violations become `Duplicated` so use cases can report
/// a conflict even when a concurrent insert slipped past the existence check.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!(constraint = ?db.constraint(), "unique constraint rejected write");
            RepositoryError::Duplicated
        }
        _ => {
            tracing::error!(error = %error, "database operation failed");
            RepositoryError::DatabaseError
        }
    }
}
