//! Tests for the get_users endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::controller::user::get_users;

use super::*;

/// Expected: Ok with 200 OK and an empty array
#[tokio::test]
async fn success_with_no_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!([]));

    Ok(())
}

/// Tests that user listings expose id and email but never the password.
///
/// Expected: Ok with 200 OK and no `password` key on any entry
#[tokio::test]
async fn success_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .with_mock_user("leia")
        .build()
        .await?;

    let result = get_users(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let users = body.as_array().expect("Expected an array of users");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("id").is_some());
    }
    assert_eq!(users[0]["email"], mock_email("luke"));

    Ok(())
}

/// Expected: Err with 500 when the user table is missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(resp).await["message"], "Internal server error");

    Ok(())
}
