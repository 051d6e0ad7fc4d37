use chrono::SecondsFormat;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Render a timestamp the way the store columns hold it: ISO-8601 with
/// millisecond precision and a `Z` suffix (`2024-05-01T10:00:00.000Z`).
pub fn iso_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_millis_with_z_suffix() {
        let ts = chrono::Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .single()
            .unwrap();
        assert_eq!(iso_timestamp(&ts), "2024-05-01T10:00:00.000Z");
    }
}
