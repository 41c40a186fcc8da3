use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::plate::model::Plate;
use business::domain::plate::value_objects::PlateCategory;

#[derive(Debug, FromRow)]
pub struct PlateEntity {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub active: bool,
    pub restaurant_id: i64,
}

impl PlateEntity {
    /// Fails only when the stored category is not one the domain knows.
    pub fn into_domain(self) -> Result<Plate, RepositoryError> {
        let category = self.category.parse::<PlateCategory>().map_err(|e| {
            tracing::error!(plate_id = self.id, error = %e, "corrupt plate category");
            RepositoryError::DatabaseError
        })?;

        Ok(Plate::from_repository(
            self.id,
            self.name,
            self.price,
            self.description,
            self.image_url,
            category,
            self.active,
            self.restaurant_id,
        ))
    }
}
