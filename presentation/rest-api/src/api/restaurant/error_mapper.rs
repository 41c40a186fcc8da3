use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::restaurant::errors::RestaurantError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, status_for_kind};

impl IntoErrorResponse for RestaurantError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = status_for_kind(self.kind());
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "restaurant request failed");
        }
        (status, ErrorResponse::new(name, self.to_string()))
    }
}
