use crate::models::{AttendanceRecord, AttendanceStatus};
use crate::streak::subject_days;
use chrono::NaiveDate;

/// Share of the subject's recorded days marked present, as a whole percentage.
///
/// A subject with no records reports 100.
pub fn attendance_percentage(records: &[AttendanceRecord], subject_id: &str) -> u8 {
    let days = subject_days(records, subject_id);
    if days.is_empty() {
        return 100;
    }

    let present = days.iter().filter(|record| record.is_present()).count();
    ((present as f64 / days.len() as f64) * 100.0).round() as u8
}

pub fn attendance_status_on(
    records: &[AttendanceRecord],
    subject_id: &str,
    date: NaiveDate,
) -> AttendanceStatus {
    subject_days(records, subject_id)
        .into_iter()
        .find(|record| record.date == Some(date))
        .map(|record| record.status)
        .unwrap_or(AttendanceStatus::Absent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus::{Absent, Late, Present};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
    }

    #[test]
    fn percentage_without_records_is_full() {
        assert_eq!(attendance_percentage(&[], "S"), 100);
        let others = vec![AttendanceRecord::new("T", date(1), Absent)];
        assert_eq!(attendance_percentage(&others, "S"), 100);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let records = vec![
            AttendanceRecord::new("S", date(1), Present),
            AttendanceRecord::new("S", date(2), Present),
            AttendanceRecord::new("S", date(3), Absent),
        ];
        assert_eq!(attendance_percentage(&records, "S"), 67);
    }

    #[test]
    fn percentage_counts_each_date_once() {
        let records = vec![
            AttendanceRecord::new("S", date(1), Present),
            AttendanceRecord::new("S", date(1), Present),
            AttendanceRecord::new("S", date(2), Late),
        ];
        assert_eq!(attendance_percentage(&records, "S"), 50);
    }

    #[test]
    fn status_lookup_defaults_to_absent() {
        let records = vec![
            AttendanceRecord::new("S", date(1), Present),
            AttendanceRecord::new("S", date(2), Late),
            AttendanceRecord::new("T", date(3), Present),
        ];
        assert_eq!(attendance_status_on(&records, "S", date(1)), Present);
        assert_eq!(attendance_status_on(&records, "S", date(2)), Late);
        assert_eq!(attendance_status_on(&records, "S", date(3)), Absent);
        assert_eq!(attendance_status_on(&records, "S", date(4)), Absent);
    }
}
