//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI
//! specification. The generated document feeds both Swagger UI at `/docs` and
//! the sitemap served at `/`.

use axum::{extract::Request, http::Uri, Router};
use tower::util::MapRequest;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Prefix served by Swagger UI, which redirects `/docs` to `/docs/` itself.
static DOCS_PATH: &str = "/docs";

/// The servable application: the router with state applied, wrapped so request
/// paths are normalized before routing.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Builds the application served by `main`.
///
/// Trailing slashes are trimmed before routing, so `/planets/` and `/planets`
/// reach the same handler.
pub fn app(state: AppState) -> App {
    MapRequest::new(
        routes().with_state(state),
        trim_trailing_slash as fn(Request) -> Request,
    )
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every documented endpoint
/// - `GET /user` - List users
/// - `GET /Characters`, `GET /Characters/{id}`, `POST /characters`
/// - `GET /planets`, `GET /planets/{id}`, `POST /planets`
/// - `GET /fav_characters`, `POST /fav_characters`, `DELETE /fav_characters/{id}`
/// - `GET /fav_planets`, `POST /fav_planets`, `DELETE /fav_planets/{id}`
///
/// The OpenAPI specification is available at `/docs/openapi.json` and Swagger UI
/// is served at `/docs`. Requests matching no route receive a JSON 404 and a
/// known path with the wrong method receives a JSON 405.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet favorites catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite character and planet API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::character::add_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::planet::add_planet))
        .routes(routes!(
            controller::favorite::get_fav_characters,
            controller::favorite::add_fav_character
        ))
        .routes(routes!(controller::favorite::delete_fav_character))
        .routes(routes!(
            controller::favorite::get_fav_planets,
            controller::favorite::add_fav_planet
        ))
        .routes(routes!(controller::favorite::delete_fav_planet))
        .split_for_parts();

    let sitemap = controller::sitemap::build_sitemap(&api);

    routes
        .route("/", controller::sitemap::sitemap_route(sitemap))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .fallback(controller::sitemap::route_not_found)
        .method_not_allowed_fallback(controller::sitemap::method_not_allowed)
}

fn trim_trailing_slash(mut request: Request) -> Request {
    let path = request.uri().path();
    if path == "/" || !path.ends_with('/') || path.starts_with(DOCS_PATH) {
        return request;
    }

    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    let path_and_query = match request.uri().query() {
        Some(query) => format!("{}?{}", trimmed, query),
        None => trimmed.to_string(),
    };

    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = path_and_query.parse().ok();
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }

    request
}
