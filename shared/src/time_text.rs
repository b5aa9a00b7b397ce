use chrono::{DateTime, Utc};

/// Short date, e.g. "Mar 1, 2026".
pub fn format_date(dt: &DateTime<Utc>) -> String {
    let day = dt.format("%d").to_string();
    let day = day.trim_start_matches('0');
    format!("{} {}, {}", dt.format("%b"), day, dt.format("%Y"))
}

/// Date with time, e.g. "Mar 1, 2026, 12:05 PM".
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    format!("{}, {}", format_date(dt), dt.format("%I:%M %p"))
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_date_time};
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_single_digit_day_without_padding() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 1, 12, 5, 0).unwrap();
        assert_eq!(format_date(&dt), "Mar 1, 2026");
    }

    #[test]
    fn formats_double_digit_day() {
        let dt = Utc.with_ymd_and_hms(2025, 11, 23, 0, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "Nov 23, 2025");
    }

    #[test]
    fn formats_time_in_twelve_hour_clock() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 1, 12, 5, 0).unwrap();
        assert_eq!(format_date_time(&dt), "Mar 1, 2026, 12:05 PM");

        let early = Utc.with_ymd_and_hms(2026, 3, 1, 0, 30, 0).unwrap();
        assert_eq!(format_date_time(&early), "Mar 1, 2026, 12:30 AM");
    }
}
