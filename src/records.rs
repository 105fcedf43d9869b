use crate::errors::RecordError;
use crate::models::{AttendanceRecord, AttendanceStatus, RawAttendance};
use chrono::{DateTime, NaiveDate};
use tracing::warn;

impl TryFrom<&RawAttendance> for AttendanceRecord {
    type Error = RecordError;

    fn try_from(raw: &RawAttendance) -> Result<Self, Self::Error> {
        let meta = &raw.metadata;

        let subject_id = meta
            .student_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(RecordError::MissingSubject)?;

        let key = meta
            .status
            .as_ref()
            .map(|status| status.key.trim())
            .ok_or(RecordError::MissingStatus)?;
        let status = AttendanceStatus::from_key(key)
            .ok_or_else(|| RecordError::UnknownStatus(key.to_string()))?;

        Ok(Self {
            subject_id: subject_id.to_string(),
            date: meta.date.as_deref().and_then(parse_record_date),
            status,
        })
    }
}

/// Parses a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, dropping the time of day.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Validates raw documents, skipping (and logging) any that cannot be used.
pub fn normalize_records(raws: &[RawAttendance]) -> Vec<AttendanceRecord> {
    raws.iter()
        .filter_map(|raw| match AttendanceRecord::try_from(raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(id = raw.id.as_deref().unwrap_or("-"), "skipping attendance record: {err}");
                None
            }
        })
        .collect()
}
