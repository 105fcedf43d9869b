use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/students/:student_id/streak", get(handlers::get_streak))
        .route("/api/students/:student_id/summary", get(handlers::get_summary))
        .route(
            "/api/students/:student_id/attendance/:date",
            get(handlers::get_status),
        )
        .route("/api/attendance", post(handlers::mark_attendance))
        .route("/api/qr", post(handlers::issue_qr_code))
        .with_state(state)
}
