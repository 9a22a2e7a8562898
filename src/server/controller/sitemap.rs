use axum::{http::StatusCode, response::IntoResponse, routing::MethodRouter, Json};
use utoipa::openapi::OpenApi;

use crate::{
    model::api::{EndpointDto, SitemapDto},
    server::{error::error_response, model::app::AppState},
};

/// Collects every documented method and path from the OpenAPI document.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut endpoints = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, _) in operations.into_iter().filter(|(_, present)| *present) {
            endpoints.push(EndpointDto {
                method: method.to_string(),
                path: path.clone(),
            });
        }
    }

    SitemapDto { endpoints }
}

/// `GET /` route answering with the sitemap
pub fn sitemap_route(sitemap: SitemapDto) -> MethodRouter<AppState> {
    axum::routing::get(move || async move { (StatusCode::OK, Json(sitemap)) })
}

/// Fallback for requests that match no route
pub async fn route_not_found() -> impl IntoResponse {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

/// Fallback for a known path requested with an unsupported method
pub async fn method_not_allowed() -> impl IntoResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
