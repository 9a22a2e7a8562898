//! Server application core modules.
//!
//! This module contains the HTTP routing, request handling, database access and
//! startup glue for the Holonet favorites catalog.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
