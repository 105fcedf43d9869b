pub mod app;
pub mod attendance;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod qr;
pub mod records;
pub mod rewards;
pub mod state;
pub mod storage;
pub mod streak;

pub use app::router;
pub use attendance::{attendance_percentage, attendance_status_on};
pub use models::{AttendanceRecord, AttendanceStatus};
pub use records::normalize_records;
pub use rewards::{eligible_for_milestone, Milestone};
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
pub use streak::{compute_streak, compute_streak_today};
