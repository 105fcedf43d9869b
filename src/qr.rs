use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

const QR_PREFIX: &str = "QR";
const QR_VALIDITY_MINUTES: i64 = 5;

pub fn generate_qr_code() -> String {
    generate_qr_code_at(Utc::now())
}

/// Builds a one-time attendance code: `QR-<unix millis>-<6 hex chars>`.
pub fn generate_qr_code_at(now: DateTime<Utc>) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    format!("{QR_PREFIX}-{}-{}", now.timestamp_millis(), &nonce[..6])
}

pub fn validate_qr_code(code: &str) -> bool {
    validate_qr_code_at(code, Utc::now())
}

/// A code is valid for five minutes after it was issued.
pub fn validate_qr_code_at(code: &str, now: DateTime<Utc>) -> bool {
    let parts: Vec<&str> = code.split('-').collect();
    let [prefix, millis, _nonce] = parts.as_slice() else {
        return false;
    };
    if *prefix != QR_PREFIX {
        return false;
    }
    let Ok(issued) = millis.parse::<i64>() else {
        return false;
    };

    let window = Duration::minutes(QR_VALIDITY_MINUTES).num_milliseconds();
    now.timestamp_millis().saturating_sub(issued) < window
}
