use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::plate::errors::PlateError;
use crate::domain::plate::model::Plate;
use crate::domain::plate::repository::PlateQueryRepository;
use crate::domain::plate::use_cases::get_active_by_restaurant::{
    GetActivePlatesByRestaurantParams, GetActivePlatesByRestaurantUseCase,
};
use crate::domain::shared::pagination::PageRequest;

pub struct GetActivePlatesByRestaurantUseCaseImpl {
    pub repository: Arc<dyn PlateQueryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetActivePlatesByRestaurantUseCase for GetActivePlatesByRestaurantUseCaseImpl {
    async fn execute(
        &self,
        params: GetActivePlatesByRestaurantParams,
    ) -> Result<Vec<Plate>, PlateError> {
        let page = PageRequest::new(params.page, params.size);
        self.logger.info(&format!(
            "Listing active plates of restaurant {} (category: {}) page {} size {}",
            params.restaurant_id,
            params
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "any".to_string()),
            page.page(),
            page.size()
        ));

        let plates = self
            .repository
            .find_active_by_restaurant(params.restaurant_id, params.category, page)
            .await?;

        self.logger
            .info(&format!("Retrieved {} plates", plates.len()));
        Ok(plates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::plate::value_objects::PlateCategory;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub PlateQueryRepo {}

        #[async_trait]
        impl PlateQueryRepository for PlateQueryRepo {
            async fn find_active_by_restaurant(
                &self,
                restaurant_id: i64,
                category: Option<PlateCategory>,
                page: PageRequest,
            ) -> Result<Vec<Plate>, RepositoryError>;
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

    fn plate(id: i64, name: &str, category: PlateCategory) -> Plate {
        Plate::from_repository(
            id,
            name.to_string(),
            12000,
            format!("{} of the house", name),
            format!("https://img.example/{}.png", id),
            category,
            true,
            1,
        )
    }

    #[tokio::test]
    async fn should_normalize_paging_before_querying() {
        let mut mock_repo = MockPlateQueryRepo::new();
        mock_repo
            .expect_find_active_by_restaurant()
            .with(eq(1), eq(None), eq(PageRequest::new(0, 1)))
            .times(1)
            .returning(|_, _, _| Ok(vec![plate(1, "Arepa", PlateCategory::Starter)]));

        let use_case = GetActivePlatesByRestaurantUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetActivePlatesByRestaurantParams {
                restaurant_id: 1,
                category: None,
                page: -5,
                size: 0,
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_forward_category_filter() {
        let mut mock_repo = MockPlateQueryRepo::new();
        mock_repo
            .expect_find_active_by_restaurant()
            .with(
                eq(1),
                eq(Some(PlateCategory::Dessert)),
                eq(PageRequest::new(2, 5)),
            )
            .returning(|_, _, _| {
                Ok(vec![
                    plate(4, "Brownie", PlateCategory::Dessert),
                    plate(2, "Flan", PlateCategory::Dessert),
                ])
            });

        let use_case = GetActivePlatesByRestaurantUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let plates = use_case
            .execute(GetActivePlatesByRestaurantParams {
                restaurant_id: 1,
                category: Some(PlateCategory::Dessert),
                page: 2,
                size: 5,
            })
            .await
            .unwrap();

        let names: Vec<&str> = plates.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Brownie", "Flan"]);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_restaurant() {
        let mut mock_repo = MockPlateQueryRepo::new();
        mock_repo
            .expect_find_active_by_restaurant()
            .returning(|_, _, _| Ok(vec![]));

        let use_case = GetActivePlatesByRestaurantUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetActivePlatesByRestaurantParams {
                restaurant_id: 404,
                category: None,
                page: 0,
                size: 10,
            })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
