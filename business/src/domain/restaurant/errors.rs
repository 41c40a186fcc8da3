use crate::domain::errors::{ErrorKind, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum RestaurantError {
    #[error("owner role required")]
    OwnerRoleRequired,
    #[error("name cannot be only digits")]
    NameOnlyDigits,
    #[error("invalid phone")]
    InvalidPhone,
    #[error("nit already exists")]
    TaxIdAlreadyExists,
    #[error("restaurant not found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[source] RepositoryError),
}

impl RestaurantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RestaurantError::OwnerRoleRequired => ErrorKind::Authorization,
            RestaurantError::NameOnlyDigits | RestaurantError::InvalidPhone => {
                ErrorKind::Validation
            }
            RestaurantError::TaxIdAlreadyExists => ErrorKind::Conflict,
            RestaurantError::NotFound => ErrorKind::NotFound,
            RestaurantError::Repository(_) => ErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for RestaurantError {
    fn from(error: RepositoryError) -> Self {
        match error {
            // The nit unique constraint is the only one on restaurants.
            RepositoryError::Duplicated => RestaurantError::TaxIdAlreadyExists,
            RepositoryError::NotFound => RestaurantError::NotFound,
            other => RestaurantError::Repository(other),
        }
    }
}
