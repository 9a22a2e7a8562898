use super::*;

/// Tests that the sitemap lists every documented endpoint.
///
/// Expected: 200 OK with an entry per method and path
#[tokio::test]
async fn sitemap_lists_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);

    let endpoints = body["endpoints"]
        .as_array()
        .expect("Expected an endpoints array");
    assert_eq!(endpoints.len(), 13);
    assert!(endpoints.contains(&json!({"method": "GET", "path": "/Characters/{id}"})));
    assert!(endpoints.contains(&json!({"method": "POST", "path": "/characters"})));
    assert!(endpoints.contains(&json!({"method": "DELETE", "path": "/fav_planets/{id}"})));

    Ok(())
}

/// Expected: 200 OK serving the OpenAPI document
#[tokio::test]
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Holonet");
    assert!(body["paths"].get("/fav_characters/{id}").is_some());

    Ok(())
}

/// Expected: 404 Not Found with a JSON message for an unknown route
#[tokio::test]
async fn unknown_route_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/starships", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");

    Ok(())
}

/// Expected: 405 Method Not Allowed with a JSON message for a known path
#[tokio::test]
async fn wrong_method_is_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::PUT, "/planets", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method not allowed");

    let (status, body) = send(&app, Method::DELETE, "/Characters/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.get("message").is_some());

    Ok(())
}

/// Expected: Swagger UI is still reachable under its own trailing-slash path
#[tokio::test]
async fn swagger_ui_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let request = Request::builder()
        .uri("/docs/")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
