//! Time utilities

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// UTC instants covering the half-open day range [begin, end], for
/// calendar queries that take plain dates
pub fn day_span(begin: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let begin = begin.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let end = end.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc() + Duration::days(1);
    (begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_span_is_inclusive_of_end_date() {
        let begin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let (b, e) = day_span(begin, end);
        assert_eq!((e - b).num_days(), 3);
    }
}
