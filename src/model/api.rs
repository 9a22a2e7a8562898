use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// A plain confirmation message, returned by successful deletes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// A single documented route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EndpointDto {
    pub method: String,
    pub path: String,
}

/// Listing of every documented route served by the API
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<EndpointDto>,
}
