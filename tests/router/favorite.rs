use super::*;

/// Expected: 200 OK with exactly `{"planet":1,"user":1}`, then the row is listed with an id
#[tokio::test]
async fn fav_planet_echo_is_exact() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("leia")
        .with_mock_planet("Alderaan")
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/fav_planets",
        Some(json!({"planet": 1, "user": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"planet": 1, "user": 1}));

    let (status, body) = send(&app, Method::GET, "/fav_planets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "planet": 1, "user": 1}]));

    Ok(())
}

/// Expected: 200 OK on the first delete, 404 Not Found on the second
#[tokio::test]
async fn deleting_fav_character_twice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .with_mock_character("Obi-Wan Kenobi")
        .build()
        .await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        Method::POST,
        "/fav_characters",
        Some(json!({"character": 1, "user": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/fav_characters/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Fav character with ID 1 deleted successfully"})
    );

    let (status, body) = send(&app, Method::DELETE, "/fav_characters/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Fav Character not found"}));

    Ok(())
}

/// Expected: 404 Not Found with a `message` key
#[tokio::test]
async fn deleting_unknown_fav_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::DELETE, "/fav_planets/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("message").is_some());

    Ok(())
}

/// Expected: 400 Bad Request and no favorite row created
#[tokio::test]
async fn fav_character_with_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Chewbacca")
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/fav_characters",
        Some(json!({"character": 1, "user": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Referenced user with ID 5 does not exist");

    let (_, body) = send(&app, Method::GET, "/fav_characters", None).await;
    assert_eq!(body, json!([]));

    Ok(())
}

/// Expected: 400 Bad Request when the referenced planet does not exist
#[tokio::test]
async fn fav_planet_with_unknown_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("rey")
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/fav_planets",
        Some(json!({"planet": 3, "user": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Referenced planet with ID 3 does not exist");

    Ok(())
}
