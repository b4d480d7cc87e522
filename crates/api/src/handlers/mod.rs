//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `tourcraft_db`,
//! enforce ownership and lifecycle rules at the boundary, and map errors
//! via [`crate::error::AppError`].

pub mod auth;
pub mod dashboard;
pub mod public;
pub mod recording;
pub mod saved_tour;
pub mod step;
pub mod tour;
