use chrono::{DateTime, Local};

/// Human-facing rendering used in seed names and descriptions.
pub(crate) fn display_datetime(value: &DateTime<Local>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Minute-precision DATETIME literal for the legacy schema.
pub(crate) fn mysql_datetime(value: &DateTime<Local>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// URL-safe fragment appended to seeded slugs.
pub(crate) fn slug_fragment(value: &DateTime<Local>) -> String {
    value.format("%d-%m-%Y_%H-%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_the_three_seed_formats() {
        let value = Local.with_ymd_and_hms(2026, 8, 30, 18, 5, 0).unwrap();
        assert_eq!(display_datetime(&value), "30/08/2026 18:05");
        assert_eq!(mysql_datetime(&value), "2026-08-30 18:05");
        assert_eq!(slug_fragment(&value), "30-08-2026_18-05");
    }
}
