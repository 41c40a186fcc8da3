use crate::domain::errors::{ErrorKind, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum PlateError {
    #[error("name required")]
    NameRequired,
    #[error("price must be a positive integer")]
    PriceNotPositive,
    #[error("description required")]
    DescriptionRequired,
    #[error("imageUrl required")]
    ImageUrlRequired,
    #[error("category required")]
    CategoryRequired,
    #[error("restaurantId required")]
    RestaurantIdRequired,
    #[error("restaurant not found")]
    RestaurantNotFound,
    #[error("plate not found")]
    PlateNotFound,
    #[error("only the restaurant owner can create plates")]
    CreateRequiresOwner,
    #[error("only the restaurant owner can update plates")]
    UpdateRequiresOwner,
    #[error("plate name already exists in restaurant")]
    NameAlreadyExists,
    #[error("repository.persistence")]
    Repository(#[source] RepositoryError),
}

impl PlateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlateError::NameRequired
            | PlateError::PriceNotPositive
            | PlateError::DescriptionRequired
            | PlateError::ImageUrlRequired
            | PlateError::CategoryRequired
            | PlateError::RestaurantIdRequired => ErrorKind::Validation,
            PlateError::RestaurantNotFound | PlateError::PlateNotFound => ErrorKind::NotFound,
            PlateError::CreateRequiresOwner | PlateError::UpdateRequiresOwner => {
                ErrorKind::Authorization
            }
            PlateError::NameAlreadyExists => ErrorKind::Conflict,
            PlateError::Repository(_) => ErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for PlateError {
    fn from(error: RepositoryError) -> Self {
        match error {
            // (restaurant_id, name) is the only unique key on plates.
            RepositoryError::Duplicated => PlateError::NameAlreadyExists,
            // An update that matched no row: the plate vanished mid-request.
            RepositoryError::NotFound => PlateError::PlateNotFound,
            other => PlateError::Repository(other),
        }
    }
}
