use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::PageRequest;

use super::model::{NewRestaurant, Restaurant};

/// Write side of restaurant storage.
///
/// `exists_by_tax_id` is an early exit only; the storage-level unique
/// constraint on the nit is authoritative and reports
/// `RepositoryError::Duplicated` from `save`.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn exists_by_tax_id(&self, nit: &str) -> Result<bool, RepositoryError>;
    async fn save(&self, restaurant: &NewRestaurant) -> Result<Restaurant, RepositoryError>;
}

#[async_trait]
pub trait RestaurantQueryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, RepositoryError>;
    /// One page of restaurants ordered by name ascending.
    async fn find_all_ordered_by_name(
        &self,
        page: PageRequest,
    ) -> Result<Vec<Restaurant>, RepositoryError>;
}
