use crate::errors::AppError;
use crate::models::AttendanceData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/attendance.json"))
}

pub async fn load_data(path: &Path) -> AttendanceData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse attendance file {}: {err}", path.display());
                AttendanceData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AttendanceData::default(),
        Err(err) => {
            error!("failed to read attendance file {}: {err}", path.display());
            AttendanceData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AttendanceData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceMetadata, AttendanceStatus, RawAttendance};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("attendance_streaks_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.attendance.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.attendance.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_documents_load_back() {
        let path = temp_path("persist");
        let data = AttendanceData {
            attendance: vec![RawAttendance {
                id: Some("att-1".to_string()),
                metadata: AttendanceMetadata {
                    student_id: Some("S".to_string()),
                    date: Some("2026-10-19".to_string()),
                    status: Some(AttendanceStatus::Present.into()),
                    ..AttendanceMetadata::default()
                },
            }],
        };
        persist_data(&path, &data).await.unwrap();

        let loaded = load_data(&path).await;
        assert_eq!(loaded.attendance.len(), 1);
        let meta = &loaded.attendance[0].metadata;
        assert_eq!(meta.student_id.as_deref(), Some("S"));
        assert_eq!(meta.status.as_ref().map(|s| s.key.as_str()), Some("present"));
        assert!(meta.qr_code.is_none());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn store_documents_with_extra_fields_load() {
        let path = temp_path("extra");
        let json = r#"{ "attendance": [ { "id": "a", "slug": "a", "type": "attendance",
            "metadata": { "student_id": "S", "status": { "key": "late", "value": "Late" } } } ] }"#;
        fs::write(&path, json).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.attendance.len(), 1);
        assert!(loaded.attendance[0].metadata.date.is_none());
        let _ = fs::remove_file(&path).await;
    }
}
