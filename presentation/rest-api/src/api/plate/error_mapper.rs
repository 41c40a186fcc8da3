use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::plate::errors::PlateError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, status_for_kind};

impl IntoErrorResponse for PlateError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = status_for_kind(self.kind());
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "plate request failed");
        }
        (status, ErrorResponse::new(name, self.to_string()))
    }
}
