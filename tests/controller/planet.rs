//! Tests for the planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::{
    model::planet::NewPlanetDto,
    server::controller::{
        planet::{add_planet, get_planet, get_planets},
        util::extract::{JsonBody, PathParam},
    },
};

use super::*;

fn new_planet(name: &str) -> NewPlanetDto {
    NewPlanetDto {
        name: name.to_string(),
        population: Some(200_000),
        terrain: Some("desert".to_string()),
        climate: Some("arid".to_string()),
        diameter: Some(10_465),
        rotation_period: None,
        gravity: None,
        surface_water: None,
    }
}

/// Expected: Ok with 200 OK listing every inserted planet
#[tokio::test]
async fn get_planets_lists_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let resp = get_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expected: Err with 404 Not Found and a message
#[tokio::test]
async fn get_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planet(State(test.to_app_state()), PathParam(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Planet not found");

    Ok(())
}

/// Tests that omitted optional fields stay out of the echo.
///
/// Expected: Ok with 200 OK and no `gravity` key in the response
#[tokio::test]
async fn add_planet_echo_omits_missing_optionals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = add_planet(State(test.to_app_state()), JsonBody(new_planet("Tatooine")))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Tatooine");
    assert!(body.get("gravity").is_none());
    assert!(body.get("id").is_none());

    Ok(())
}

/// Expected: Ok then the new planet is readable by id
#[tokio::test]
async fn add_planet_then_get() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let mut planet = new_planet("Hoth");
    planet.gravity = Some("1.1 standard".to_string());

    add_planet(State(test.to_app_state()), JsonBody(planet))
        .await
        .unwrap();

    let resp = get_planet(State(test.to_app_state()), PathParam(1))
        .await
        .unwrap()
        .into_response();

    let body = json_body(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Hoth");
    assert_eq!(body["gravity"], "1.1 standard");
    assert_eq!(body["population"], 200_000);
    assert!(body["rotation_period"].is_null());

    Ok(())
}
