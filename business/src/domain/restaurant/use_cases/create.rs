use async_trait::async_trait;

use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::shared::value_objects::UserId;

pub struct CreateRestaurantParams {
    pub name: String,
    pub nit: String,
    pub address: String,
    pub phone: String,
    pub logo_url: String,
    pub owner_id: UserId,
}

#[async_trait]
pub trait CreateRestaurantUseCase: Send + Sync {
    async fn execute(&self, params: CreateRestaurantParams) -> Result<Restaurant, RestaurantError>;
}
