//! Data transfer objects shared by the HTTP API.
//!
//! Every persisted entity has a matching DTO produced through a `From<Model>`
//! conversion. These conversions are the only serialization path out of the
//! database, so fields that must never leave the server (such as the user
//! password) are simply absent from the DTO.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
