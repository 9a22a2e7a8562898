use super::*;

fn planet_body() -> Value {
    json!({
        "name": "Tatooine",
        "population": 200000,
        "terrain": "desert",
        "climate": "arid",
        "diameter": 10465,
        "rotation_period": 23,
        "surface_water": 1
    })
}

/// Tests that a created planet is readable by its generated id.
///
/// Expected: POST 200 echoing the body, GET returns the same fields plus `id`
#[tokio::test]
async fn created_planet_is_readable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::POST, "/planets", Some(planet_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, planet_body());

    let (status, body) = send(&app, Method::GET, "/planets/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = planet_body();
    expected["id"] = json!(1);
    expected["gravity"] = Value::Null;
    assert_eq!(body, expected);

    Ok(())
}

/// Tests that a duplicate character name is rejected without adding a row.
///
/// Expected: 409 Conflict and the character list length unchanged
#[tokio::test]
async fn duplicate_character_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Luke Skywalker")
        .build()
        .await?;
    let app = app(&test);

    let character = json!({
        "name": "Luke Skywalker",
        "height": 172,
        "mass": 77,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male"
    });

    let (status, body) = send(&app, Method::POST, "/characters", Some(character)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.get("message").is_some());

    let (status, body) = send(&app, Method::GET, "/Characters", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Expected: 400 Bad Request with a message when a required field is missing
#[tokio::test]
async fn missing_required_field_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let mut body = planet_body();
    body.as_object_mut().unwrap().remove("diameter");

    let (status, body) = send(&app, Method::POST, "/planets", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());

    let (_, body) = send(&app, Method::GET, "/planets", None).await;
    assert_eq!(body, json!([]));

    Ok(())
}

/// Expected: 400 Bad Request with a message for malformed JSON
#[tokio::test]
async fn malformed_json_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/characters")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await.get("message").is_some());

    Ok(())
}

/// Expected: 404 Not Found with a message for an unknown character id
#[tokio::test]
async fn unknown_character_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/Characters/12", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Character not found");

    Ok(())
}

/// Expected: 400 Bad Request with a message for a non-integer id
#[tokio::test]
async fn non_integer_id_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/planets/tatooine", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("message").is_some());

    Ok(())
}

/// Expected: 200 OK and no `password` key on any user
#[tokio::test]
async fn users_never_expose_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("han")
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "email": mock_email("han")}]));

    Ok(())
}

/// Tests that present but null attributes are stored and read back as null.
///
/// Expected: POST 200 echoing the nulls, GET returns the row with the same nulls
#[tokio::test]
async fn null_attributes_are_stored() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let character = json!({
        "name": "R2-D2",
        "height": 96,
        "mass": null,
        "hair_color": null,
        "skin_color": "white, blue",
        "eye_color": "red",
        "birth_year": "33BBY",
        "gender": null
    });

    let (status, body) = send(&app, Method::POST, "/characters", Some(character.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, character);

    let (status, body) = send(&app, Method::GET, "/Characters/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = character;
    expected["id"] = json!(1);
    assert_eq!(body, expected);

    let planet = json!({
        "name": "Dagobah",
        "population": null,
        "terrain": "swamp, jungles",
        "climate": "murky",
        "diameter": null
    });

    let (status, _) = send(&app, Method::POST, "/planets", Some(planet)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/planets/1", None).await;
    assert!(body["population"].is_null());
    assert!(body["diameter"].is_null());
    assert_eq!(body["climate"], "murky");

    Ok(())
}

/// Expected: 400 Bad Request when a nullable key is left out entirely
#[tokio::test]
async fn omitted_nullable_key_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let character = json!({
        "name": "R2-D2",
        "height": 96,
        "hair_color": null,
        "skin_color": "white, blue",
        "eye_color": "red",
        "birth_year": "33BBY",
        "gender": null
    });

    let (status, body) = send(&app, Method::POST, "/characters", Some(character)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("mass"));

    Ok(())
}

/// Expected: paths with a trailing slash resolve like their slash-free form
#[tokio::test]
async fn trailing_slash_resolves() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("lando")
        .with_mock_planet("Bespin")
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/planets/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, Method::GET, "/user/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["email"], mock_email("lando"));

    let (status, body) = send(&app, Method::GET, "/planets/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bespin");

    Ok(())
}
