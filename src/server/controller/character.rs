use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, NewCharacterDto},
    },
    server::{
        controller::util::extract::{JsonBody, PathParam},
        error::Error,
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "characters";

/// List all characters
#[utoipa::path(
    get,
    path = "/Characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_all_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/Characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving the character", body = CharacterDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    PathParam(character_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db)
        .get_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Add a character
///
/// Responds with the submitted body.
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = NewCharacterDto,
    responses(
        (status = 200, description = "Character created, echoes the request body", body = NewCharacterDto),
        (status = 400, description = "Malformed body or missing field", body = ErrorDto),
        (status = 409, description = "A character with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_character(
    State(state): State<AppState>,
    JsonBody(character): JsonBody<NewCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    CharacterService::new(&state.db)
        .create_character(character.clone())
        .await?;

    Ok((StatusCode::OK, Json(character)))
}
