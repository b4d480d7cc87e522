//! Domain rules shared by the persistence and API layers.
//!
//! This crate has no I/O: it defines the error taxonomy, shared ID and
//! timestamp types, the status vocabulary, the tour publication lifecycle,
//! the recording lifecycle, and field-level validation helpers.

pub mod error;
pub mod lifecycle;
pub mod recording;
pub mod status;
pub mod types;
pub mod validation;
