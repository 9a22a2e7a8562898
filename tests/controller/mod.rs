//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state built from a [`TestContext`],
//! verifying status codes and JSON bodies for success and failure paths.

mod planet;
mod user;

use holonet_test_utils::prelude::*;

use crate::util::json_body;
