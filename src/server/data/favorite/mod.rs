//! Repositories for the favorite-relation tables.
//!
//! Favorites link a user to a character or planet. Rows are only ever inserted
//! or deleted, never updated.

pub mod character;
pub mod planet;
