use async_trait::async_trait;

use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::Restaurant;

/// Raw paging input; normalized by the use case.
pub struct GetAllRestaurantsParams {
    pub page: i32,
    pub size: i32,
}

#[async_trait]
pub trait GetAllRestaurantsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllRestaurantsParams,
    ) -> Result<Vec<Restaurant>, RestaurantError>;
}
