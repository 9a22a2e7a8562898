use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, resource::Resource};

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid request body: {0}")]
    Body(String),
    #[error("Invalid request path: {0}")]
    Path(String),
    #[error("Referenced {} with ID {id} does not exist", .resource.to_string().to_lowercase())]
    UnknownReference { resource: Resource, id: i32 },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
