use async_trait::async_trait;

use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::shared::value_objects::UserId;

pub struct SetPlateActiveParams {
    pub plate_id: i64,
    pub active: bool,
    pub owner_id: UserId,
}

#[async_trait]
pub trait SetPlateActiveUseCase: Send + Sync {
    async fn execute(&self, params: SetPlateActiveParams) -> Result<Plate, PlateError>;
}
