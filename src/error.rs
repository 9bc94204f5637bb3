// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::generator::GeneratorError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No data received")]
    NoData,

    #[error("answer generation failed: {0}")]
    Generator(#[from] GeneratorError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoData => StatusCode::BAD_REQUEST,
            AppError::Generator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::NoData => "No data received",
            AppError::Generator(err) => {
                tracing::error!(error = %err, "collaborator call failed");
                "Failed to generate answer"
            }
        };
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (self.status(), body).into_response()
    }
}
