use crate::attendance::{attendance_percentage, attendance_status_on};
use crate::errors::{AppError, RecordError};
use crate::models::{
    AttendanceMetadata, AttendanceRecord, AttendanceStatus, HealthResponse, MarkAttendanceRequest,
    MarkAttendanceResponse, QrCodeResponse, RawAttendance, StatusResponse, StreakResponse,
    SummaryResponse, TodayQuery,
};
use crate::qr::{generate_qr_code, validate_qr_code};
use crate::records::normalize_records;
use crate::rewards::milestone_progress;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::streak::{compute_streak, compute_streak_today};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{error, info};
use uuid::Uuid;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_streak(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<StreakResponse>, AppError> {
    let today = resolve_today(query.today.as_deref())?;
    let records = load_records(&state).await;

    Ok(Json(StreakResponse {
        streak: compute_streak(&records, &student_id, today),
        student_id,
        today,
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let today = resolve_today(query.today.as_deref())?;
    let records = load_records(&state).await;
    let streak = compute_streak(&records, &student_id, today);

    Ok(Json(SummaryResponse {
        attendance_percentage: attendance_percentage(&records, &student_id),
        milestones: milestone_progress(streak),
        student_id,
        today,
        streak,
    }))
}

pub async fn get_status(
    State(state): State<AppState>,
    Path((student_id, date)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, AppError> {
    let date = parse_day(&date)?;
    let records = load_records(&state).await;

    Ok(Json(StatusResponse {
        status: attendance_status_on(&records, &student_id, date),
        student_id,
        date,
    }))
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(payload): Json<MarkAttendanceRequest>,
) -> Result<Json<MarkAttendanceResponse>, AppError> {
    let student_id = payload.student_id.trim().to_string();
    if student_id.is_empty() {
        return Err(RecordError::MissingSubject.into());
    }

    let status = AttendanceStatus::from_key(&payload.status)
        .ok_or_else(|| RecordError::UnknownStatus(payload.status.trim().to_string()))?;

    let date = match payload.date.as_deref() {
        Some(value) => parse_day(value)?,
        None => Local::now().date_naive(),
    };

    if let Some(code) = payload.qr_code.as_deref() {
        if !validate_qr_code(code) {
            return Err(AppError::bad_request("qr code is invalid or expired"));
        }
    }

    let id = format!("att-{}", Uuid::new_v4().simple());
    let document = RawAttendance {
        id: Some(id.clone()),
        metadata: AttendanceMetadata {
            student_id: Some(student_id.clone()),
            class_id: payload.class_id,
            date: Some(date.to_string()),
            status: Some(status.into()),
            qr_code: payload.qr_code,
            marked_by: payload.marked_by,
            timestamp: Some(Utc::now().to_rfc3339()),
        },
    };

    let mut data = state.data.lock().await;
    data.attendance.push(document);
    if let Err(err) = persist_data(&state.data_path, &data).await {
        data.attendance.pop();
        error!(%student_id, "failed to save attendance: {}", err.message);
        return Err(err);
    }

    let records = normalize_records(&data.attendance);
    let streak = compute_streak_today(&records, &student_id);
    info!(%student_id, %date, status = status.key(), streak, "attendance recorded");

    Ok(Json(MarkAttendanceResponse {
        id,
        student_id,
        date,
        status,
        streak,
    }))
}

pub async fn issue_qr_code() -> Json<QrCodeResponse> {
    Json(QrCodeResponse {
        code: generate_qr_code(),
    })
}

async fn load_records(state: &AppState) -> Vec<AttendanceRecord> {
    let data = state.data.lock().await;
    normalize_records(&data.attendance)
}

fn resolve_today(value: Option<&str>) -> Result<NaiveDate, AppError> {
    match value {
        Some(value) => parse_day(value),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_day(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{value}', expected YYYY-MM-DD")))
}
