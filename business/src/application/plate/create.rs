use std::sync::Arc;

use async_trait::async_trait;

use crate::application::plate::ownership::{PlateAction, ensure_restaurant_owner};
use crate::domain::logger::Logger;
use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::{NewPlateProps, Plate};
use crate::domain::plate::repository::PlateRepository;
use crate::domain::plate::use_cases::create::{CreatePlateParams, CreatePlateUseCase};
use crate::domain::restaurant::repository::RestaurantQueryRepository;

pub struct CreatePlateUseCaseImpl {
    pub repository: Arc<dyn PlateRepository>,
    pub restaurant_repository: Arc<dyn RestaurantQueryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePlateUseCase for CreatePlateUseCaseImpl {
    async fn execute(&self, params: CreatePlateParams) -> Result<Plate, PlateError> {
        self.logger.info(&format!(
            "Creating plate: {} requested by {}",
            params.name, params.owner_id
        ));

        let mut plate = Plate::new(NewPlateProps {
            name: params.name,
            price: params.price,
            description: params.description,
            image_url: params.image_url,
            category: params.category,
            restaurant_id: params.restaurant_id,
        })?;

        ensure_restaurant_owner(
            self.restaurant_repository.as_ref(),
            plate.restaurant_id,
            params.owner_id,
            PlateAction::Create,
        )
        .await?;

        if self
            .repository
            .exists_by_name_and_restaurant(&plate.name, plate.restaurant_id)
            .await?
        {
            return Err(PlateError::NameAlreadyExists);
        }

        plate.active = true;
        let saved = self.repository.save(&plate).await?;

        self.logger.info(&format!(
            "Plate created with id: {:?} in restaurant {}",
            saved.id, saved.restaurant_id
        ));
        Ok(saved)
    }
}
