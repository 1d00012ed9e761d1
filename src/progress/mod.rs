//! Progress aggregation: streaks, best day, day-bucketed series and badges
//! derived from a user's completion history.
//!
//! Everything here is a pure function of the records passed in plus the
//! `today` used for the mini-graph window. Nothing is cached between calls.

pub mod achievements;
pub mod best_day;
pub mod bucketing;
pub mod streak;
pub mod tracker;

use chrono::{Local, NaiveDate};

use crate::models::{Completion, CompletionRecord, MiniGraphPoint, ProgressStats, ProgressSummary};
use best_day::best_day;
use bucketing::{MINI_GRAPH_DAYS, window_buckets};
use streak::{sorted_by_time, trailing_streak};

pub use tracker::ProgressTracker;

pub fn summarize(records: &[CompletionRecord], today: NaiveDate) -> ProgressSummary {
    let sorted = sorted_by_time(records);

    let stats = ProgressStats {
        total_workouts: sorted.len(),
        current_streak: trailing_streak(&sorted),
        best_day: best_day(&sorted),
    };

    let mini_graph = window_buckets(&sorted, today, MINI_GRAPH_DAYS)
        .into_iter()
        .map(|bucket| MiniGraphPoint {
            day: bucket.date.format("%a").to_string(),
            count: bucket.exercise_count,
        })
        .collect();

    ProgressSummary { stats, mini_graph }
}

pub fn summarize_now(records: &[CompletionRecord]) -> ProgressSummary {
    summarize(records, Local::now().date_naive())
}

/// Rough energy estimate: logged minutes times a flat per-minute rate.
pub fn estimated_calories(completions: &[Completion], kcal_per_minute: u32) -> u32 {
    completions
        .iter()
        .map(|c| c.duration_minutes * kcal_per_minute)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BestDay;
    use chrono::{Duration, NaiveDateTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

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
    fn empty_history() {
        let summary = summarize(&[], today());
        assert_eq!(summary.stats.total_workouts, 0);
        assert_eq!(summary.stats.current_streak, 0);
        assert_eq!(summary.stats.best_day, BestDay::default());
        assert_eq!(summary.mini_graph.len(), 7);
        assert!(summary.mini_graph.iter().all(|p| p.count == 0));
    }

    #[test]
    fn mini_graph_is_labelled_by_weekday_oldest_first() {
        let summary = summarize(&[], today());
        let labels: Vec<&str> = summary.mini_graph.iter().map(|p| p.day.as_str()).collect();
        // 2024-01-04 was a Thursday, 2024-01-10 a Wednesday.
        assert_eq!(labels, vec!["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
    }

    #[test]
    fn evaluation_is_idempotent_and_order_independent() {
        let records = vec![
            rec("2024-01-09 08:00", 4),
            rec("2024-01-07 08:00", 1),
            rec("2024-01-08 08:00", 2),
            rec("2023-12-20 08:00", 6),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let first = summarize(&records, today());
        assert_eq!(first, summarize(&records, today()));
        assert_eq!(first, summarize(&reversed, today()));
        assert_eq!(first.stats.total_workouts, 4);
        assert_eq!(first.stats.current_streak, 3);
    }

    #[test]
    fn best_day_uses_all_time_history() {
        let records = vec![
            rec("2024-01-01 08:00", 3),
            rec("2024-01-02 08:00", 5),
            rec("2024-01-01 17:00", 2),
        ];
        let summary = summarize(&records, today());
        assert_eq!(summary.stats.best_day.date, "Jan 1");
        assert_eq!(summary.stats.best_day.count, 5);
    }

    #[test]
    fn ties_resolve_to_the_earliest_day() {
        let records = vec![rec("2024-01-05 08:00", 4), rec("2024-01-02 08:00", 4)];
        assert_eq!(summarize(&records, today()).stats.best_day.date, "Jan 2");
    }

    #[test]
    fn old_records_count_but_stay_off_the_graph() {
        let old = (today() - Duration::days(10))
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .fixed_offset();
        let records = vec![CompletionRecord::new(old, 8)];
        let summary = summarize(&records, today());
        assert_eq!(summary.stats.total_workouts, 1);
        assert_eq!(summary.stats.best_day.count, 8);
        assert_eq!(summary.stats.best_day.date, "Dec 31");
        assert!(summary.mini_graph.iter().all(|p| p.count == 0));
    }

    #[test]
    fn streak_resets_after_two_day_gap() {
        let records = vec![rec("2024-01-06 08:00", 1), rec("2024-01-08 08:00", 1)];
        assert_eq!(summarize(&records, today()).stats.current_streak, 1);
    }

    #[test]
    fn summary_helpers() {
        let records = vec![
            rec("2024-01-10 08:00", 3),
            rec("2024-01-09 08:00", 1),
            rec("2024-01-09 18:00", 1),
        ];
        let summary = summarize(&records, today());
        assert_eq!(summary.week_total(), 5);
        assert_eq!(summary.active_days(), 2);
        assert_eq!(summary.peak(), 3);
    }
}
