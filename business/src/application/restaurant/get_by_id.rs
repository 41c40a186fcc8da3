use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::repository::RestaurantQueryRepository;
use crate::domain::restaurant::use_cases::get_by_id::{
    GetRestaurantByIdParams, GetRestaurantByIdUseCase,
};

pub struct GetRestaurantByIdUseCaseImpl {
    pub repository: Arc<dyn RestaurantQueryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRestaurantByIdUseCase for GetRestaurantByIdUseCaseImpl {
    async fn execute(&self, params: GetRestaurantByIdParams) -> Result<Restaurant, RestaurantError> {
        self.logger
            .info(&format!("Getting restaurant by id: {}", params.id));

        self.repository
            .find_by_id(params.id)
            .await?
            .ok_or(RestaurantError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ErrorKind, RepositoryError};
    use crate::domain::shared::pagination::PageRequest;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub RestaurantQueryRepo {}

        #[async_trait]
        impl RestaurantQueryRepository for RestaurantQueryRepo {
            async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, RepositoryError>;
            async fn find_all_ordered_by_name(&self, page: PageRequest) -> Result<Vec<Restaurant>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_restaurant_when_exists() {
        let mut mock_repo = MockRestaurantQueryRepo::new();
        mock_repo.expect_find_by_id().returning(|id| {
            Ok(Some(Restaurant::from_repository(
                id,
                "Pizza Palace".to_string(),
                "123456789".to_string(),
                "Main Street 1".to_string(),
                "+1234567890".to_string(),
                "https://img.example/pizza.png".to_string(),
                UserId::new(100),
            )))
        });

        let use_case = GetRestaurantByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let restaurant = use_case
            .execute(GetRestaurantByIdParams { id: 1 })
            .await
            .unwrap();

        assert_eq!(restaurant.id, 1);
        assert_eq!(restaurant.nit, "123456789");
    }

    #[tokio::test]
    async fn should_return_not_found_when_absent() {
        let mut mock_repo = MockRestaurantQueryRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetRestaurantByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(GetRestaurantByIdParams { id: 404 })
            .await
            .unwrap_err();

        assert!(matches!(error, RestaurantError::NotFound));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
