//! Shared test utilities for the Holonet workspace.
//!
//! Tests declare the tables and fixture rows they need through [`TestBuilder`]
//! and receive a [`TestContext`] backed by an in-memory SQLite database.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{factory, user::mock_email},
        TestBuilder, TestContext, TestError,
    };
}
