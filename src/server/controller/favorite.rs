use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{
            FavoriteCharacterDto, FavoritePlanetDto, NewFavoriteCharacterDto, NewFavoritePlanetDto,
        },
    },
    server::{
        controller::util::extract::{JsonBody, PathParam},
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorites";

/// List all favorite characters
#[utoipa::path(
    get,
    path = "/fav_characters",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when listing favorite characters", body = Vec<FavoriteCharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fav_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_fav_characters().await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// List all favorite planets
#[utoipa::path(
    get,
    path = "/fav_planets",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when listing favorite planets", body = Vec<FavoritePlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fav_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_fav_planets().await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a favorite character for a user
///
/// Responds with the submitted body.
#[utoipa::path(
    post,
    path = "/fav_characters",
    tag = FAVORITE_TAG,
    request_body = NewFavoriteCharacterDto,
    responses(
        (status = 200, description = "Favorite created, echoes the request body", body = NewFavoriteCharacterDto),
        (status = 400, description = "Malformed body or unknown user/character", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_fav_character(
    State(state): State<AppState>,
    JsonBody(favorite): JsonBody<NewFavoriteCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_fav_character(favorite.clone())
        .await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Add a favorite planet for a user
///
/// Responds with the submitted body.
#[utoipa::path(
    post,
    path = "/fav_planets",
    tag = FAVORITE_TAG,
    request_body = NewFavoritePlanetDto,
    responses(
        (status = 200, description = "Favorite created, echoes the request body", body = NewFavoritePlanetDto),
        (status = 400, description = "Malformed body or unknown user/planet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_fav_planet(
    State(state): State<AppState>,
    JsonBody(favorite): JsonBody<NewFavoritePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_fav_planet(favorite.clone())
        .await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Delete a favorite character
#[utoipa::path(
    delete,
    path = "/fav_characters/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite character ID")),
    responses(
        (status = 200, description = "Favorite character deleted", body = MessageDto),
        (status = 404, description = "Favorite character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fav_character(
    State(state): State<AppState>,
    PathParam(favorite_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_fav_character(favorite_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Fav character with ID {} deleted successfully", favorite_id),
        }),
    ))
}

/// Delete a favorite planet
#[utoipa::path(
    delete,
    path = "/fav_planets/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite planet ID")),
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 404, description = "Favorite planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fav_planet(
    State(state): State<AppState>,
    PathParam(favorite_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_fav_planet(favorite_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Fav planet with ID {} deleted successfully", favorite_id),
        }),
    ))
}
