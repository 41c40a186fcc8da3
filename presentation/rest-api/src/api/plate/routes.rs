use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::plate::errors::PlateError;
use business::domain::plate::model::Plate;
use business::domain::plate::use_cases::create::{CreatePlateParams, CreatePlateUseCase};
use business::domain::plate::use_cases::get_active_by_restaurant::{
    GetActivePlatesByRestaurantParams, GetActivePlatesByRestaurantUseCase,
};
use business::domain::plate::use_cases::set_active::{SetPlateActiveParams, SetPlateActiveUseCase};
use business::domain::plate::use_cases::update::{UpdatePlateParams, UpdatePlateUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::plate::dto::{
    CreatePlateRequest, PlateCategoryDto, PlateResponse, PlateStatusRequest, UpdatePlateRequest,
};
use crate::api::security::{JwtBearer, Role};
use crate::api::tags::ApiTags;

const OWNER_ROLE_REQUIRED: &str = "owner role required";

fn default_page() -> i32 {
    0
}

fn default_size() -> i32 {
    10
}

pub struct PlateApi {
    create_use_case: Arc<dyn CreatePlateUseCase>,
    update_use_case: Arc<dyn UpdatePlateUseCase>,
    set_active_use_case: Arc<dyn SetPlateActiveUseCase>,
    get_active_by_restaurant_use_case: Arc<dyn GetActivePlatesByRestaurantUseCase>,
}

impl PlateApi {
    pub fn new(
        create_use_case: Arc<dyn CreatePlateUseCase>,
        update_use_case: Arc<dyn UpdatePlateUseCase>,
        set_active_use_case: Arc<dyn SetPlateActiveUseCase>,
        get_active_by_restaurant_use_case: Arc<dyn GetActivePlatesByRestaurantUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            set_active_use_case,
            get_active_by_restaurant_use_case,
        }
    }
}

/// Menu management API
///
/// Mutations require the OWNER role and ownership of the plate's restaurant.
#[OpenApi]
impl PlateApi {
    /// Create a plate
    ///
    /// New plates are always active.
    #[oai(path = "/api/v1/plates", method = "post", tag = "ApiTags::Plates")]
    async fn create_plate(
        &self,
        auth: JwtBearer,
        body: Json<CreatePlateRequest>,
    ) -> CreatePlateResponse {
        if !auth.0.has_role(Role::Owner) {
            return CreatePlateResponse::Forbidden(ErrorResponse::forbidden(OWNER_ROLE_REQUIRED));
        }

        let params = CreatePlateParams {
            name: body.0.name,
            price: body.0.price,
            description: body.0.description,
            image_url: body.0.image_url,
            category: body.0.category.map(|c| c.into()),
            restaurant_id: body.0.restaurant_id,
            owner_id: auth.0.user_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(plate) => CreatePlateResponse::Created(Json(plate.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePlateResponse::BadRequest(json),
                    403 => CreatePlateResponse::Forbidden(json),
                    404 => CreatePlateResponse::NotFound(json),
                    409 => CreatePlateResponse::Conflict(json),
                    _ => CreatePlateResponse::InternalError(json),
                }
            }
        }
    }

    /// Update price and description of a plate
    #[oai(path = "/api/v1/plates/:id", method = "put", tag = "ApiTags::Plates")]
    async fn update_plate(
        &self,
        auth: JwtBearer,
        id: Path<i64>,
        body: Json<UpdatePlateRequest>,
    ) -> PlateMutationResponse {
        if !auth.0.has_role(Role::Owner) {
            return PlateMutationResponse::Forbidden(ErrorResponse::forbidden(OWNER_ROLE_REQUIRED));
        }

        let params = UpdatePlateParams {
            plate_id: id.0,
            price: body.0.price,
            description: body.0.description,
            owner_id: auth.0.user_id,
        };

        PlateMutationResponse::from_result(self.update_use_case.execute(params).await)
    }

    /// Enable or disable a plate
    ///
    /// Disabled plates disappear from the public menu listing.
    #[oai(path = "/api/v1/plates/:id/status", method = "patch", tag = "ApiTags::Plates")]
    async fn set_plate_status(
        &self,
        auth: JwtBearer,
        id: Path<i64>,
        body: Json<PlateStatusRequest>,
    ) -> PlateMutationResponse {
        if !auth.0.has_role(Role::Owner) {
            return PlateMutationResponse::Forbidden(ErrorResponse::forbidden(OWNER_ROLE_REQUIRED));
        }

        let params = SetPlateActiveParams {
            plate_id: id.0,
            active: body.0.active,
            owner_id: auth.0.user_id,
        };

        PlateMutationResponse::from_result(self.set_active_use_case.execute(params).await)
    }

    /// List the active plates of a restaurant
    ///
    /// Public. Optionally filtered by category and ordered by name.
    #[oai(path = "/api/v1/plates/restaurant/:id", method = "get", tag = "ApiTags::Plates")]
    async fn list_active_plates(
        &self,
        id: Path<i64>,
        category: Query<Option<PlateCategoryDto>>,
        #[oai(default = "default_page")] page: Query<i32>,
        #[oai(default = "default_size")] size: Query<i32>,
    ) -> ListPlatesResponse {
        let params = GetActivePlatesByRestaurantParams {
            restaurant_id: id.0,
            category: category.0.map(|c| c.into()),
            page: page.0,
            size: size.0,
        };

        match self.get_active_by_restaurant_use_case.execute(params).await {
            Ok(plates) => {
                ListPlatesResponse::Ok(Json(plates.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListPlatesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreatePlateResponse {
    #[oai(status = 201)]
    Created(Json<PlateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by the update and status endpoints.
#[derive(poem_openapi::ApiResponse)]
pub enum PlateMutationResponse {
    #[oai(status = 200)]
    Ok(Json<PlateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl PlateMutationResponse {
    fn from_result(result: Result<Plate, PlateError>) -> Self {
        match result {
            Ok(plate) => PlateMutationResponse::Ok(Json(plate.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlateMutationResponse::BadRequest(json),
                    403 => PlateMutationResponse::Forbidden(json),
                    404 => PlateMutationResponse::NotFound(json),
                    _ => PlateMutationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListPlatesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PlateResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
