//! Controller utilities.
//!
//! - `extract` - Request extractors that turn rejections into validation errors

pub mod extract;
