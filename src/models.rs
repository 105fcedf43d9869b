use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rewards::MilestoneProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
        }
    }
}

/// Select-field shape used by the content store: `{ "key": ..., "value": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusField {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl From<AttendanceStatus> for StatusField {
    fn from(status: AttendanceStatus) -> Self {
        Self {
            key: status.key().to_string(),
            value: status.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttendanceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Attendance document as stored, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawAttendance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: AttendanceMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttendanceData {
    #[serde(default)]
    pub attendance: Vec<RawAttendance>,
}

/// A validated attendance data point for one subject on one day.
///
/// `date` is `None` when the source date could not be parsed; such a record
/// never lines up with a streak day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub subject_id: String,
    pub date: Option<NaiveDate>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(subject_id: impl Into<String>, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            subject_id: subject_id.into(),
            date: Some(date),
            status,
        }
    }

    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

#[derive(Debug, Deserialize)]
pub struct TodayQuery {
    pub today: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub student_id: String,
    pub date: Option<String>,
    pub status: String,
    pub class_id: Option<String>,
    pub qr_code: Option<String>,
    pub marked_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkAttendanceResponse {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub student_id: String,
    pub today: NaiveDate,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub student_id: String,
    pub today: NaiveDate,
    pub streak: u32,
    pub attendance_percentage: u8,
    pub milestones: Vec<MilestoneProgress>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QrCodeResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
