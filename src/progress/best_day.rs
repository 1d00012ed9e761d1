use crate::models::{BestDay, CompletionRecord};
use crate::progress::bucketing::all_time_buckets;

/// Calendar day with the highest summed exercise count across all history.
///
/// Days are scanned in first-seen order of `records` and only a strictly
/// greater count replaces the current best, so among tied days the one seen
/// first wins. Pass a chronologically sorted slice to resolve ties to the
/// earliest date.
pub fn best_day(records: &[CompletionRecord]) -> BestDay {
    let mut best = BestDay::default();
    for bucket in all_time_buckets(records) {
        if bucket.exercise_count > best.count {
            best = BestDay {
                date: bucket.date.format("%b %-d").to_string(),
                count: bucket.exercise_count,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn rec(s: &str, count: u32) -> CompletionRecord {
        CompletionRecord::new(
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
                .unwrap()
                .and_utc()
                .fixed_offset(),
            count,
        )
    }

    #[test]
    fn sums_same_day_before_comparing() {
        let records = vec![
            rec("2024-01-01 09:00", 3),
            rec("2024-01-02 09:00", 5),
            rec("2024-01-01 18:00", 2),
        ];
        assert_eq!(
            best_day(&records),
            BestDay {
                date: "Jan 1".to_string(),
                count: 5
            }
        );
    }

    #[test]
    fn no_records_gives_empty_best_day() {
        assert_eq!(best_day(&[]), BestDay::default());
        assert_eq!(best_day(&[]).date, "");
    }

    #[test]
    fn zero_count_days_never_win() {
        let records = vec![rec("2024-05-01 09:00", 0)];
        assert_eq!(best_day(&records), BestDay::default());
    }

    #[test]
    fn ties_go_to_first_seen_day() {
        let records = vec![rec("2024-03-12 09:00", 4), rec("2024-03-02 09:00", 4)];
        assert_eq!(best_day(&records).date, "Mar 12");

        let mut sorted = records.clone();
        sorted.sort_by_key(|r| r.completed_at);
        assert_eq!(best_day(&sorted).date, "Mar 2");
    }
}
