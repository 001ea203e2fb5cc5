use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Body of every failed request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[schema(example = "Creating new employee failed")]
    pub message: String,
    #[schema(example = 500)]
    pub status_code: u16,
}

/// Boundary error: whatever went wrong, the client gets a generic message
/// and a 500. Details only go to the log.
#[derive(Debug, Display)]
#[display(fmt = "{}", message)]
pub struct ApiError {
    message: &'static str,
}

impl ApiError {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// Logs `err` and hides it behind `message`.
    pub fn store(message: &'static str, err: StoreError) -> Self {
        error!(error = %err, "{}", message);
        Self::new(message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.message.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}
