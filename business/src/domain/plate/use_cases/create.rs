use async_trait::async_trait;

use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::plate::value_objects::PlateCategory;
use crate::domain::shared::value_objects::UserId;

/// Plate fields as received from the caller; presence is checked by the use case.
pub struct CreatePlateParams {
    pub name: String,
    pub price: Option<i32>,
    pub description: String,
    pub image_url: String,
    pub category: Option<PlateCategory>,
    pub restaurant_id: Option<i64>,
    pub owner_id: UserId,
}

#[async_trait]
pub trait CreatePlateUseCase: Send + Sync {
    async fn execute(&self, params: CreatePlateParams) -> Result<Plate, PlateError>;
}
