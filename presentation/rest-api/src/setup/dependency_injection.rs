use std::sync::Arc;

use logger::TracingLogger;
use persistence::plate::repository::PlateRepositoryPostgres;
use persistence::restaurant::repository::RestaurantRepositoryPostgres;
use users::client::UsersClient;
use users::user_directory::UserDirectoryHttp;

use business::application::plate::create::CreatePlateUseCaseImpl;
use business::application::plate::get_active_by_restaurant::GetActivePlatesByRestaurantUseCaseImpl;
use business::application::plate::set_active::SetPlateActiveUseCaseImpl;
use business::application::plate::update::UpdatePlateUseCaseImpl;
use business::application::restaurant::create::CreateRestaurantUseCaseImpl;
use business::application::restaurant::get_all::GetAllRestaurantsUseCaseImpl;
use business::application::restaurant::get_by_id::GetRestaurantByIdUseCaseImpl;

use crate::config::users_service_config::UsersServiceConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub restaurant_api: crate::api::restaurant::routes::RestaurantApi,
    pub plate_api: crate::api::plate::routes::PlateApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, users_service: &UsersServiceConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let restaurant_repository = Arc::new(RestaurantRepositoryPostgres::new(pool.clone()));
        let plate_repository = Arc::new(PlateRepositoryPostgres::new(pool));
        let user_directory = Arc::new(UserDirectoryHttp::new(UsersClient::new(
            users_service.base_url.clone(),
            users_service.timeout,
        )));

        // Restaurant use cases
        let create_restaurant_use_case = Arc::new(CreateRestaurantUseCaseImpl {
            repository: restaurant_repository.clone(),
            user_directory,
            logger: logger.clone(),
        });
        let get_all_restaurants_use_case = Arc::new(GetAllRestaurantsUseCaseImpl {
            repository: restaurant_repository.clone(),
            logger: logger.clone(),
        });
        let get_restaurant_by_id_use_case = Arc::new(GetRestaurantByIdUseCaseImpl {
            repository: restaurant_repository.clone(),
            logger: logger.clone(),
        });

        // Plate use cases
        let create_plate_use_case = Arc::new(CreatePlateUseCaseImpl {
            repository: plate_repository.clone(),
            restaurant_repository: restaurant_repository.clone(),
            logger: logger.clone(),
        });
        let update_plate_use_case = Arc::new(UpdatePlateUseCaseImpl {
            repository: plate_repository.clone(),
            restaurant_repository: restaurant_repository.clone(),
            logger: logger.clone(),
        });
        let set_plate_active_use_case = Arc::new(SetPlateActiveUseCaseImpl {
            repository: plate_repository.clone(),
            restaurant_repository,
            logger: logger.clone(),
        });
        let get_active_plates_use_case = Arc::new(GetActivePlatesByRestaurantUseCaseImpl {
            repository: plate_repository,
            logger,
        });

        let restaurant_api = crate::api::restaurant::routes::RestaurantApi::new(
            create_restaurant_use_case,
            get_all_restaurants_use_case,
            get_restaurant_by_id_use_case,
        );

        let plate_api = crate::api::plate::routes::PlateApi::new(
            create_plate_use_case,
            update_plate_use_case,
            set_plate_active_use_case,
            get_active_plates_use_case,
        );

        Self {
            health_api,
            restaurant_api,
            plate_api,
        }
    }
}
