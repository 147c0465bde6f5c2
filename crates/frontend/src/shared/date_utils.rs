use chrono::{DateTime, NaiveDate, Utc};

/// "Jan 15, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_optional_date(date: Option<&NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// "Jan 15, 10:30" для списка сообщений
pub fn format_message_time(ts: &DateTime<Utc>) -> String {
    ts.format("%b %d, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(&d), "Jan 05, 2024");
        assert_eq!(format_optional_date(None), "");
    }

    #[test]
    fn test_format_message_time() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_message_time(&ts), "Jan 15, 10:30");
    }
}
