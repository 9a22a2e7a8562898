use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        planet::{NewPlanetDto, PlanetDto},
    },
    server::{
        controller::util::extract::{JsonBody, PathParam},
        error::Error,
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planets";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_all_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Add a planet
///
/// Responds with the submitted body.
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = NewPlanetDto,
    responses(
        (status = 200, description = "Planet created, echoes the request body", body = NewPlanetDto),
        (status = 400, description = "Malformed body or missing field", body = ErrorDto),
        (status = 409, description = "A planet with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet(
    State(state): State<AppState>,
    JsonBody(planet): JsonBody<NewPlanetDto>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db)
        .create_planet(planet.clone())
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}
