//! Time and id utilities

use chrono::{DateTime, Datelike, Utc};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC time as an ISO-8601 / RFC 3339 string
///
/// Persisted records store timestamps in this format.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Generate an opaque record id: `prefix_<millis>_<random suffix>`
///
/// Keeps the timestamp-plus-suffix shape so ids sort roughly by creation
/// time; the uuid fragment avoids collisions within the same millisecond.
pub fn generate_id(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", prefix, now_millis(), &suffix[..9])
}

/// Format a date as a short human-readable delivery date, e.g. "7 Sep 2026"
pub fn format_short_date(date: DateTime<Utc>) -> String {
    let month = match date.month() {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    };
    format!("{} {} {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id("user");
        assert!(id.starts_with("user_"));
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id("order");
        let b = generate_id("order");
        assert_ne!(a, b);
    }

    #[test]
    fn test_format_short_date() {
        let date = DateTime::parse_from_rfc3339("2026-09-07T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_short_date(date), "7 Sep 2026");
    }
}
