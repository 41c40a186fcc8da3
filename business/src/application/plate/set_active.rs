use std::sync::Arc;

use async_trait::async_trait;

use crate::application::plate::ownership::{PlateAction, ensure_restaurant_owner};
use crate::domain::logger::Logger;
use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::plate::repository::PlateRepository;
use crate::domain::plate::use_cases::set_active::{SetPlateActiveParams, SetPlateActiveUseCase};
use crate::domain::restaurant::repository::RestaurantQueryRepository;

pub struct SetPlateActiveUseCaseImpl {
    pub repository: Arc<dyn PlateRepository>,
    pub restaurant_repository: Arc<dyn RestaurantQueryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetPlateActiveUseCase for SetPlateActiveUseCaseImpl {
    async fn execute(&self, params: SetPlateActiveParams) -> Result<Plate, PlateError> {
        self.logger.info(&format!(
            "Setting plate {} active={} requested by {}",
            params.plate_id, params.active, params.owner_id
        ));

        let mut plate = self
            .repository
            .find_by_id(params.plate_id)
            .await?
            .ok_or(PlateError::PlateNotFound)?;

        ensure_restaurant_owner(
            self.restaurant_repository.as_ref(),
            plate.restaurant_id,
            params.owner_id,
            PlateAction::Update,
        )
        .await?;

        plate.active = params.active;
        let saved = self.repository.save(&plate).await?;

        self.logger.info(&format!(
            "Plate {} is now {}",
            params.plate_id,
            if saved.active { "active" } else { "inactive" }
        ));
        Ok(saved)
    }
}
