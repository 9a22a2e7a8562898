//! Server-side models.
//!
//! - `app` - Shared application state passed to every handler
//! - `db` - Type aliases for SeaORM entity models

pub mod app;
pub mod db;
