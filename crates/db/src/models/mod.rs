//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod dashboard;
pub mod recording;
pub mod saved_tour;
pub mod session;
pub mod tour;
pub mod tour_step;
pub mod tour_view;
pub mod user;
