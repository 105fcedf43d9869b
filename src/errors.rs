use axum::http::StatusCode;
use thiserror::Error;

/// Why a raw attendance document could not become an `AttendanceRecord`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("attendance record has no student_id")]
    MissingSubject,
    #[error("attendance record has no status")]
    MissingStatus,
    #[error("unknown attendance status '{0}' (expected present, absent or late)")]
    UnknownStatus(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
