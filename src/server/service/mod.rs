//! Service layer.
//!
//! Services sit between controllers and repositories. They convert entity
//! models into DTOs, turn missing rows into [`ResourceError::NotFound`], and
//! check that favorites reference existing rows before inserting them.
//!
//! [`ResourceError::NotFound`]: crate::server::error::resource::ResourceError::NotFound

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
