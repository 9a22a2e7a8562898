//! Test fixture modules for database row creation.
//!
//! - `user` - Catalog users
//! - `catalog` - Characters and planets
//! - `favorite` - Favorite-relation rows
//! - `factory` - In-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
