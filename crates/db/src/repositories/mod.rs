//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod recording_repo;
pub mod saved_tour_repo;
pub mod session_repo;
pub mod tour_repo;
pub mod tour_step_repo;
pub mod tour_view_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use recording_repo::RecordingRepo;
pub use saved_tour_repo::SavedTourRepo;
pub use session_repo::SessionRepo;
pub use tour_repo::TourRepo;
pub use tour_step_repo::TourStepRepo;
pub use tour_view_repo::TourViewRepo;
pub use user_repo::UserRepo;
