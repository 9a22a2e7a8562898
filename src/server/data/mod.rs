//! Data access layer repositories.
//!
//! One repository per catalog table. Each method performs a single ORM call
//! against any `ConnectionTrait`, so repositories work equally on a pooled
//! connection or inside a transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
