use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::PageRequest;

use super::model::Plate;
use super::value_objects::PlateCategory;

/// Write side of plate storage.
///
/// `save` inserts when the plate has no id and updates otherwise. A clash
/// on the (restaurant, name) unique key is reported as
/// `RepositoryError::Duplicated`.
#[async_trait]
pub trait PlateRepository: Send + Sync {
    async fn exists_by_name_and_restaurant(
        &self,
        name: &str,
        restaurant_id: i64,
    ) -> Result<bool, RepositoryError>;
    async fn save(&self, plate: &Plate) -> Result<Plate, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Plate>, RepositoryError>;
}

#[async_trait]
pub trait PlateQueryRepository: Send + Sync {
    /// Active plates of one restaurant, optionally of one category, ordered by name.
    async fn find_active_by_restaurant(
        &self,
        restaurant_id: i64,
        category: Option<PlateCategory>,
        page: PageRequest,
    ) -> Result<Vec<Plate>, RepositoryError>;
}
