use crate::models::AttendanceRecord;
use chrono::{Duration, Local, NaiveDate};

pub fn compute_streak_today(records: &[AttendanceRecord], subject_id: &str) -> u32 {
    compute_streak(records, subject_id, Local::now().date_naive())
}

/// Counts consecutive present days for `subject_id`, walking backward from `today`.
///
/// A record counts when it is present and its date is within one day of the
/// expected day (`today - streak`). The walk stops at the first absence,
/// misaligned date, or record without a usable date.
pub fn compute_streak(records: &[AttendanceRecord], subject_id: &str, today: NaiveDate) -> u32 {
    let mut streak = 0u32;

    for record in subject_days(records, subject_id) {
        let Some(date) = record.date else { break };
        if !record.is_present() {
            break;
        }
        let Some(expected) = today.checked_sub_signed(Duration::days(i64::from(streak))) else {
            break;
        };
        if expected.signed_duration_since(date).num_days().abs() > 1 {
            break;
        }
        streak += 1;
    }

    streak
}

/// One record per date for `subject_id`, newest first.
///
/// Undated records sort last. When a date appears more than once, an absent
/// record wins over a present one.
pub(crate) fn subject_days<'a>(
    records: &'a [AttendanceRecord],
    subject_id: &str,
) -> Vec<&'a AttendanceRecord> {
    let mut days: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|record| record.subject_id == subject_id)
        .collect();

    days.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.is_present().cmp(&b.is_present()))
    });
    days.dedup_by(|later, earlier| later.date == earlier.date);
    days
}
