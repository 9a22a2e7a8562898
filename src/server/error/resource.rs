use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Kinds of records exposed by the API, used to phrase error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Character,
    Planet,
    FavCharacter,
    FavPlanet,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::FavCharacter => "Fav Character",
            Self::FavPlanet => "Fav planet",
        };

        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ResourceError {
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: Resource, id: i32 },
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { resource, id } => {
                tracing::debug!(id = %id, "{}", self);

                error_response(StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
        }
    }
}
