//! Error types shared by the grid, the forwarder and the HTTP layer.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::request::ErrorResponse;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request was well-formed JSON but carried unusable values.
    #[error("{0}")]
    BadRequest(String),

    /// The plant layout is empty or not rectangular.
    #[error("Invalid plant layout: {0}")]
    Layout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or decoding failure talking to the conversational platform.
    #[error("Forwarding failed: {0}")]
    Forward(#[from] reqwest::Error),

    #[error("Conversational platform answered with status {0}")]
    ForwardStatus(u16),

    #[error("No conversational platform endpoint configured")]
    NotConfigured,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Forward(_)
            | ServiceError::ForwardStatus(_)
            | ServiceError::NotConfigured => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
