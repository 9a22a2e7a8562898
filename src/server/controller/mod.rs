//! HTTP controller endpoints for the Holonet API.
//!
//! Axum handlers for users, characters, planets and favorites. Controllers
//! extract typed inputs, call into services, and return JSON responses. Each
//! handler carries a utoipa annotation feeding the OpenAPI document and the
//! sitemap.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
