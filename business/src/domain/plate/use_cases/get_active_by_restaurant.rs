use async_trait::async_trait;

use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::plate::value_objects::PlateCategory;

pub struct GetActivePlatesByRestaurantParams {
    pub restaurant_id: i64,
    pub category: Option<PlateCategory>,
    pub page: i32,
    pub size: i32,
}

#[async_trait]
pub trait GetActivePlatesByRestaurantUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetActivePlatesByRestaurantParams,
    ) -> Result<Vec<Plate>, PlateError>;
}
