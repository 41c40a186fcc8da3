use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::restaurant::use_cases::create::{
    CreateRestaurantParams, CreateRestaurantUseCase,
};
use business::domain::restaurant::use_cases::get_all::{
    GetAllRestaurantsParams, GetAllRestaurantsUseCase,
};
use business::domain::restaurant::use_cases::get_by_id::{
    GetRestaurantByIdParams, GetRestaurantByIdUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::restaurant::dto::{
    CreateRestaurantRequest, RestaurantListItem, RestaurantResponse,
};
use crate::api::security::{JwtBearer, Role};
use crate::api::tags::ApiTags;

fn default_page() -> i32 {
    0
}

fn default_size() -> i32 {
    10
}

pub struct RestaurantApi {
    create_use_case: Arc<dyn CreateRestaurantUseCase>,
    get_all_use_case: Arc<dyn GetAllRestaurantsUseCase>,
    get_by_id_use_case: Arc<dyn GetRestaurantByIdUseCase>,
}

impl RestaurantApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRestaurantUseCase>,
        get_all_use_case: Arc<dyn GetAllRestaurantsUseCase>,
        get_by_id_use_case: Arc<dyn GetRestaurantByIdUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Restaurant registry API
#[OpenApi]
impl RestaurantApi {
    /// Register a restaurant
    ///
    /// Requires the ADMIN role. The owner must hold the OWNER role in the
    /// users service.
    #[oai(path = "/api/v1/restaurants", method = "post", tag = "ApiTags::Restaurants")]
    async fn create_restaurant(
        &self,
        auth: JwtBearer,
        body: Json<CreateRestaurantRequest>,
    ) -> CreateRestaurantResponse {
        if !auth.0.has_role(Role::Admin) {
            return CreateRestaurantResponse::Forbidden(ErrorResponse::forbidden(
                "admin role required",
            ));
        }

        let params = CreateRestaurantParams {
            name: body.0.name,
            nit: body.0.nit,
            address: body.0.address,
            phone: body.0.phone,
            logo_url: body.0.logo_url,
            owner_id: UserId::new(body.0.owner_id),
        };

        match self.create_use_case.execute(params).await {
            Ok(restaurant) => CreateRestaurantResponse::Created(Json(restaurant.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRestaurantResponse::BadRequest(json),
                    403 => CreateRestaurantResponse::Forbidden(json),
                    409 => CreateRestaurantResponse::Conflict(json),
                    _ => CreateRestaurantResponse::InternalError(json),
                }
            }
        }
    }

    /// List restaurants
    ///
    /// Public. Ordered by name; negative pages and sizes below one are clamped.
    #[oai(path = "/api/v1/restaurants", method = "get", tag = "ApiTags::Restaurants")]
    async fn list_restaurants(
        &self,
        #[oai(default = "default_page")] page: Query<i32>,
        #[oai(default = "default_size")] size: Query<i32>,
    ) -> ListRestaurantsResponse {
        let params = GetAllRestaurantsParams {
            page: page.0,
            size: size.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(restaurants) => ListRestaurantsResponse::Ok(Json(
                restaurants.into_iter().map(|r| r.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListRestaurantsResponse::InternalError(json)
            }
        }
    }

    /// Get a restaurant by ID
    #[oai(path = "/api/v1/restaurants/:id", method = "get", tag = "ApiTags::Restaurants")]
    async fn get_restaurant_by_id(&self, id: Path<i64>) -> GetRestaurantByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetRestaurantByIdParams { id: id.0 })
            .await
        {
            Ok(restaurant) => GetRestaurantByIdResponse::Ok(Json(restaurant.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRestaurantByIdResponse::NotFound(json),
                    _ => GetRestaurantByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRestaurantResponse {
    #[oai(status = 201)]
    Created(Json<RestaurantResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRestaurantsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RestaurantListItem>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRestaurantByIdResponse {
    #[oai(status = 200)]
    Ok(Json<RestaurantResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
