use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::repository::RestaurantQueryRepository;
use crate::domain::restaurant::use_cases::get_all::{
    GetAllRestaurantsParams, GetAllRestaurantsUseCase,
};
use crate::domain::shared::pagination::PageRequest;

pub struct GetAllRestaurantsUseCaseImpl {
    pub repository: Arc<dyn RestaurantQueryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllRestaurantsUseCase for GetAllRestaurantsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllRestaurantsParams,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        let page = PageRequest::new(params.page, params.size);
        self.logger.info(&format!(
            "Listing restaurants page {} size {}",
            page.page(),
            page.size()
        ));

        let restaurants = self.repository.find_all_ordered_by_name(page).await?;

        self.logger
            .info(&format!("Retrieved {} restaurants", restaurants.len()));
        Ok(restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use mockall::predicate::eq;

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

    fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant::from_repository(
            id,
            name.to_string(),
            format!("90000{}", id),
            "Main Street 1".to_string(),
            "+573001234567".to_string(),
            "https://img.example/logo.png".to_string(),
            UserId::new(100),
        )
    }

    #[tokio::test]
    async fn should_return_page_from_repository_in_order() {
        let mut mock_repo = MockRestaurantQueryRepo::new();
        mock_repo
            .expect_find_all_ordered_by_name()
            .with(eq(PageRequest::new(1, 2)))
            .returning(|_| Ok(vec![restaurant(3, "Arepas"), restaurant(1, "Burgers")]));

        let use_case = GetAllRestaurantsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllRestaurantsParams { page: 1, size: 2 })
            .await
            .unwrap();

        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Arepas", "Burgers"]);
    }

    #[tokio::test]
    async fn should_normalize_negative_page_and_zero_size() {
        let mut mock_repo = MockRestaurantQueryRepo::new();
        mock_repo
            .expect_find_all_ordered_by_name()
            .with(eq(PageRequest::new(0, 1)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case = GetAllRestaurantsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllRestaurantsParams { page: -3, size: -10 })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
