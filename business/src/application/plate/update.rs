use std::sync::Arc;

use async_trait::async_trait;

use crate::application::plate::ownership::{PlateAction, ensure_restaurant_owner};
use crate::domain::logger::Logger;
use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::plate::repository::PlateRepository;
use crate::domain::plate::use_cases::update::{UpdatePlateParams, UpdatePlateUseCase};
use crate::domain::restaurant::repository::RestaurantQueryRepository;

pub struct UpdatePlateUseCaseImpl {
    pub repository: Arc<dyn PlateRepository>,
    pub restaurant_repository: Arc<dyn RestaurantQueryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePlateUseCase for UpdatePlateUseCaseImpl {
    async fn execute(&self, params: UpdatePlateParams) -> Result<Plate, PlateError> {
        self.logger.info(&format!(
            "Updating plate {} requested by {}",
            params.plate_id, params.owner_id
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

        plate.change_details(params.price, params.description)?;
        let saved = self.repository.save(&plate).await?;

        self.logger
            .info(&format!("Plate updated: {}", params.plate_id));
        Ok(saved)
    }
}
