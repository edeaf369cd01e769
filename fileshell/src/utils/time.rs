use chrono::{DateTime, Local, Utc};

/// Returns the current UTC time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Renders a UTC timestamp in the local timezone for console output.
///
/// Example: "2025-09-13 11:49:58 +08:00"
pub fn format_local(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S %:z")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_local_shape() {
        let time = Utc.with_ymd_and_hms(2025, 9, 13, 3, 49, 58).unwrap();
        let rendered = format_local(&time);
        // "YYYY-MM-DD HH:MM:SS +HH:MM"
        assert_eq!(rendered.len(), 26);
        assert!(rendered.contains(":58 "));
    }

    #[test]
    fn test_now_is_monotonic_enough() {
        let a = now();
        let b = now();
        assert!(b >= a);
    }
}
