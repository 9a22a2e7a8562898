use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON request body whose rejections are reported as [`Error::ValidationError`].
///
/// Missing fields, wrong types, malformed JSON and a missing
/// `Content-Type: application/json` header all answer 400 with a JSON message.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Path parameters whose rejections are reported as [`Error::ValidationError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);
