use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::{NewRestaurant, NewRestaurantProps, Restaurant};
use crate::domain::restaurant::repository::RestaurantRepository;
use crate::domain::restaurant::use_cases::create::{
    CreateRestaurantParams, CreateRestaurantUseCase,
};
use crate::domain::user::services::UserDirectoryService;

pub struct CreateRestaurantUseCaseImpl {
    pub repository: Arc<dyn RestaurantRepository>,
    pub user_directory: Arc<dyn UserDirectoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRestaurantUseCase for CreateRestaurantUseCaseImpl {
    async fn execute(&self, params: CreateRestaurantParams) -> Result<Restaurant, RestaurantError> {
        self.logger.info(&format!(
            "Creating restaurant: {} for owner {}",
            params.name, params.owner_id
        ));

        if !self.user_directory.is_owner_role(params.owner_id).await {
            self.logger.warn(&format!(
                "User {} does not hold the owner role",
                params.owner_id
            ));
            return Err(RestaurantError::OwnerRoleRequired);
        }

        let restaurant = NewRestaurant::new(NewRestaurantProps {
            name: params.name,
            nit: params.nit,
            address: params.address,
            phone: params.phone,
            logo_url: params.logo_url,
            owner_id: params.owner_id,
        })?;

        if self.repository.exists_by_tax_id(&restaurant.nit).await? {
            return Err(RestaurantError::TaxIdAlreadyExists);
        }

        let saved = self.repository.save(&restaurant).await?;

        self.logger
            .info(&format!("Restaurant created with id: {}", saved.id));
        Ok(saved)
    }
}
