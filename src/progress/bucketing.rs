use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::models::{CompletionRecord, DayBucket};

pub const MINI_GRAPH_DAYS: usize = 7;

/// `days` consecutive calendar days ending at `today`, oldest first.
///
/// Every day gets a bucket even when nothing was logged; records outside
/// the window are ignored.
pub fn window_buckets(records: &[CompletionRecord], today: NaiveDate, days: usize) -> Vec<DayBucket> {
    if days == 0 {
        return Vec::new();
    }
    let start = today - Duration::days(days as i64 - 1);
    let mut buckets: Vec<DayBucket> = (0..days as i64)
        .map(|offset| DayBucket::empty(start + Duration::days(offset)))
        .collect();

    for record in records {
        let date = record.local_date();
        if date < start || date > today {
            continue;
        }
        let idx = (date - start).num_days() as usize;
        buckets[idx].exercise_count += record.exercise_count;
    }
    buckets
}

/// One bucket per distinct calendar day, in the order each day is first seen.
pub fn all_time_buckets(records: &[CompletionRecord]) -> Vec<DayBucket> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut buckets: Vec<DayBucket> = Vec::new();

    for record in records {
        let date = record.local_date();
        let idx = *index.entry(date).or_insert_with(|| {
            buckets.push(DayBucket::empty(date));
            buckets.len() - 1
        });
        buckets[idx].exercise_count += record.exercise_count;
    }
    buckets
}

/// Every day of `today`'s month, day 1 first.
pub fn month_buckets(records: &[CompletionRecord], today: NaiveDate) -> Vec<DayBucket> {
    let first = today.with_day(1).unwrap_or(today);
    let days = days_in_month(today.year(), today.month());
    let mut buckets: Vec<DayBucket> = (0..days as i64)
        .map(|offset| DayBucket::empty(first + Duration::days(offset)))
        .collect();

    for record in records {
        let date = record.local_date();
        if date.year() == today.year() && date.month() == today.month() {
            buckets[date.day0() as usize].exercise_count += record.exercise_count;
        }
    }
    buckets
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDateTime};

    fn at(date: &str, time: &str) -> DateTime<FixedOffset> {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn window_always_has_requested_length() {
        let buckets = window_buckets(&[], day("2024-03-10"), MINI_GRAPH_DAYS);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].date, day("2024-03-04"));
        assert_eq!(buckets[6].date, day("2024-03-10"));
        assert!(buckets.iter().all(|b| b.exercise_count == 0));
    }

    #[test]
    fn window_sums_same_day_records_and_skips_outside() {
        let records = vec![
            CompletionRecord::new(at("2024-03-10", "07:00:00"), 2),
            CompletionRecord::new(at("2024-03-10", "19:30:00"), 3),
            CompletionRecord::new(at("2024-03-04", "00:00:01"), 1),
            CompletionRecord::new(at("2024-03-03", "23:59:59"), 9),
            CompletionRecord::new(at("2024-03-11", "08:00:00"), 9),
        ];
        let buckets = window_buckets(&records, day("2024-03-10"), 7);
        assert_eq!(buckets[6].exercise_count, 5);
        assert_eq!(buckets[0].exercise_count, 1);
        let total: u32 = buckets.iter().map(|b| b.exercise_count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn buckets_use_the_local_calendar_day() {
        // 23:30 at UTC-5 is already the next day in UTC.
        let late = DateTime::parse_from_rfc3339("2024-03-09T23:30:00-05:00").unwrap();
        let records = vec![CompletionRecord::new(late, 4)];
        let buckets = window_buckets(&records, day("2024-03-10"), 7);
        assert_eq!(buckets[5].date, day("2024-03-09"));
        assert_eq!(buckets[5].exercise_count, 4);
        assert_eq!(buckets[6].exercise_count, 0);
    }

    #[test]
    fn zero_day_window_is_empty() {
        assert!(window_buckets(&[], day("2024-03-10"), 0).is_empty());
    }

    #[test]
    fn all_time_keeps_first_seen_order() {
        let records = vec![
            CompletionRecord::new(at("2024-01-02", "10:00:00"), 5),
            CompletionRecord::new(at("2024-01-01", "10:00:00"), 3),
            CompletionRecord::new(at("2024-01-02", "18:00:00"), 1),
        ];
        let buckets = all_time_buckets(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, day("2024-01-02"));
        assert_eq!(buckets[0].exercise_count, 6);
        assert_eq!(buckets[1].date, day("2024-01-01"));
    }

    #[test]
    fn month_buckets_cover_whole_month() {
        let records = vec![
            CompletionRecord::new(at("2024-02-29", "10:00:00"), 4),
            CompletionRecord::new(at("2024-02-01", "10:00:00"), 2),
            CompletionRecord::new(at("2023-02-01", "10:00:00"), 7),
            CompletionRecord::new(at("2024-03-01", "10:00:00"), 7),
        ];
        let buckets = month_buckets(&records, day("2024-02-15"));
        assert_eq!(buckets.len(), 29);
        assert_eq!(buckets[0].exercise_count, 2);
        assert_eq!(buckets[28].exercise_count, 4);
        let total: u32 = buckets.iter().map(|b| b.exercise_count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn days_in_month_handles_december_and_leap_years() {
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
