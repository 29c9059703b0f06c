use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::DictionaryError;

impl DictionaryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DictionaryError::NotFound(_) => StatusCode::NOT_FOUND,
            DictionaryError::AlreadyExists(_) => StatusCode::CONFLICT,
            DictionaryError::Validation(_) => StatusCode::BAD_REQUEST,
            DictionaryError::CorruptStore { .. } | DictionaryError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DictionaryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
