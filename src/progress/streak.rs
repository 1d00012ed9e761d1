use chrono::{DateTime, FixedOffset};

use crate::models::CompletionRecord;

const MS_PER_DAY: i64 = 86_400_000;

/// Whole-day gap between two instants, rounded up from the absolute
/// millisecond difference.
///
/// This is a 24-hour measure, not a calendar one: 23h across midnight is a
/// gap of 1, while 25h between consecutive calendar days is a gap of 2.
/// Offsets only affect presentation, so a daylight-saving change that turns
/// 08:00 to 08:00 into 25 real hours also gives 2.
pub fn day_gap(prev: DateTime<FixedOffset>, curr: DateTime<FixedOffset>) -> i64 {
    let ms = (curr - prev).num_milliseconds().abs();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Copy of `records` ordered by instant, oldest first.
pub fn sorted_by_time(records: &[CompletionRecord]) -> Vec<CompletionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.completed_at);
    sorted
}

/// Streak ending at the most recent completion.
///
/// A gap of one day extends the run, a longer gap restarts it at 1 and a
/// same-day completion leaves it untouched. The run is not anchored to
/// today: a run that ended weeks ago is still reported.
pub fn trailing_streak(records: &[CompletionRecord]) -> u32 {
    let sorted = sorted_by_time(records);
    let mut streak = 0u32;
    let mut last: Option<DateTime<FixedOffset>> = None;

    for record in &sorted {
        match last {
            None => streak = 1,
            Some(prev) => {
                let gap = day_gap(prev, record.completed_at);
                if gap == 1 {
                    streak += 1;
                } else if gap > 1 {
                    streak = 1;
                }
            }
        }
        last = Some(record.completed_at);
    }
    streak
}

/// Longest run of one-day gaps anywhere in the history.
///
/// Unlike [`trailing_streak`], a same-day completion restarts the run.
pub fn longest_streak(records: &[CompletionRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let sorted = sorted_by_time(records);
    let mut current = 1u32;
    let mut best = 1u32;

    for pair in sorted.windows(2) {
        if day_gap(pair[0].completed_at, pair[1].completed_at) == 1 {
            current += 1;
            best = best.max(current);
        } else {
            current = 1;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> DateTime<FixedOffset> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn local(s: &str, utc_offset_hours: i32) -> DateTime<FixedOffset> {
        DateTime::parse_from_str(
            &format!("{} {:+03}:00", s, utc_offset_hours),
            "%Y-%m-%d %H:%M %:z",
        )
        .unwrap()
    }

    fn rec(s: &str) -> CompletionRecord {
        CompletionRecord::new(at(s), 1)
    }

    #[test]
    fn gap_rounds_up_partial_days() {
        assert_eq!(day_gap(at("2024-01-01 10:00"), at("2024-01-01 10:00")), 0);
        assert_eq!(day_gap(at("2024-01-01 23:00"), at("2024-01-02 01:00")), 1);
        assert_eq!(day_gap(at("2024-01-01 10:00"), at("2024-01-02 10:00")), 1);
        assert_eq!(day_gap(at("2024-01-01 10:00"), at("2024-01-02 11:00")), 2);
        assert_eq!(day_gap(at("2024-01-03 10:00"), at("2024-01-01 10:00")), 2);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(trailing_streak(&[]), 0);
        assert_eq!(longest_streak(&[]), 0);
        assert_eq!(trailing_streak(&[rec("2024-01-01 08:00")]), 1);
        assert_eq!(longest_streak(&[rec("2024-01-01 08:00")]), 1);
    }

    #[test]
    fn consecutive_days_increment() {
        let records = vec![
            rec("2024-01-03 08:00"),
            rec("2024-01-01 08:00"),
            rec("2024-01-02 08:00"),
        ];
        assert_eq!(trailing_streak(&records), 3);
        assert_eq!(longest_streak(&records), 3);
    }

    #[test]
    fn two_day_gap_resets_to_one() {
        let records = vec![rec("2024-01-01 08:00"), rec("2024-01-03 08:00")];
        assert_eq!(trailing_streak(&records), 1);
    }

    #[test]
    fn same_day_leaves_trailing_streak_but_resets_longest_run() {
        let records = vec![
            rec("2024-01-01 08:00"),
            rec("2024-01-02 08:00"),
            rec("2024-01-02 08:00"),
            rec("2024-01-03 08:00"),
        ];
        assert_eq!(trailing_streak(&records), 3);
        assert_eq!(longest_streak(&records), 2);
    }

    #[test]
    fn trailing_streak_reflects_tail_only() {
        let records = vec![
            rec("2024-01-01 08:00"),
            rec("2024-01-02 08:00"),
            rec("2024-01-03 08:00"),
            rec("2024-01-04 08:00"),
            rec("2024-01-10 08:00"),
            rec("2024-01-11 08:00"),
        ];
        assert_eq!(trailing_streak(&records), 2);
        assert_eq!(longest_streak(&records), 4);
    }

    #[test]
    fn more_than_a_day_apart_breaks_calendar_neighbours() {
        // Consecutive calendar days but 25h apart.
        let records = vec![rec("2024-01-01 08:00"), rec("2024-01-02 09:00")];
        assert_eq!(trailing_streak(&records), 1);
        assert_eq!(longest_streak(&records), 1);
    }

    #[test]
    fn same_wall_clock_across_daylight_saving_end_is_25_hours() {
        // 08:00 EDT then 08:00 EST the next morning.
        let before = local("2024-11-02 08:00", -4);
        let after = local("2024-11-03 08:00", -5);
        assert_eq!((after - before).num_hours(), 25);
        assert_eq!(day_gap(before, after), 2);

        let records = vec![CompletionRecord::new(before, 1), CompletionRecord::new(after, 1)];
        assert_eq!(trailing_streak(&records), 1);
        assert_eq!(longest_streak(&records), 1);
        assert_eq!(records[1].local_date().to_string(), "2024-11-03");
    }

    #[test]
    fn same_wall_clock_across_daylight_saving_start_is_23_hours() {
        let before = local("2024-03-09 08:00", -5);
        let after = local("2024-03-10 08:00", -4);
        assert_eq!(day_gap(before, after), 1);
        let records = vec![CompletionRecord::new(before, 1), CompletionRecord::new(after, 1)];
        assert_eq!(trailing_streak(&records), 2);
    }

    #[test]
    fn repeated_hour_sorts_by_instant() {
        // 01:30 EDT happens before 01:10 EST on the fall-back night.
        let first = CompletionRecord::new(local("2024-11-03 01:30", -4), 1);
        let second = CompletionRecord::new(local("2024-11-03 01:10", -5), 2);
        let sorted = sorted_by_time(&[second, first]);
        assert_eq!(sorted, vec![first, second]);
    }

    #[test]
    fn input_is_not_mutated() {
        let records = vec![rec("2024-01-02 08:00"), rec("2024-01-01 08:00")];
        let before = records.clone();
        let _ = trailing_streak(&records);
        let _ = longest_streak(&records);
        assert_eq!(records, before);
    }
}
