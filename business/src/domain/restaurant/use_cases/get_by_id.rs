use async_trait::async_trait;

use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::Restaurant;

pub struct GetRestaurantByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetRestaurantByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRestaurantByIdParams) -> Result<Restaurant, RestaurantError>;
}
