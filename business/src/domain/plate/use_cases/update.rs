use async_trait::async_trait;

use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::shared::value_objects::UserId;

pub struct UpdatePlateParams {
    pub plate_id: i64,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub owner_id: UserId,
}

#[async_trait]
pub trait UpdatePlateUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePlateParams) -> Result<Plate, PlateError>;
}
