//! Badges unlocked by crossing workout-count or consecutive-day thresholds.
//!
//! Nothing is persisted: the unlocked set is recomputed from the completion
//! history every time, and every rule is checked independently.

use crate::models::{Achievement, CompletionRecord};
use crate::progress::streak::longest_streak;

pub const FIRST_WORKOUT: &str = "first_workout";
pub const FIVE_WORKOUTS: &str = "five_workouts";
pub const TEN_WORKOUTS: &str = "ten_workouts";
pub const THREE_DAY_STREAK: &str = "three_day_streak";
pub const WEEK_STREAK: &str = "week_streak";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    TotalWorkouts(usize),
    ConsecutiveDays(u32),
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementRule {
    pub achievement: Achievement,
    pub criterion: Criterion,
}

impl AchievementRule {
    fn is_met(&self, total_workouts: usize, max_consecutive_days: u32) -> bool {
        match self.criterion {
            Criterion::TotalWorkouts(min) => total_workouts >= min,
            Criterion::ConsecutiveDays(min) => max_consecutive_days >= min,
        }
    }
}

const RULES: [AchievementRule; 5] = [
    AchievementRule {
        achievement: Achievement {
            id: FIRST_WORKOUT,
            name: "First Workout",
            description: "Completed your first workout",
        },
        criterion: Criterion::TotalWorkouts(1),
    },
    AchievementRule {
        achievement: Achievement {
            id: FIVE_WORKOUTS,
            name: "Consistent",
            description: "Completed 5 workouts",
        },
        criterion: Criterion::TotalWorkouts(5),
    },
    AchievementRule {
        achievement: Achievement {
            id: TEN_WORKOUTS,
            name: "Dedicated",
            description: "Completed 10 workouts",
        },
        criterion: Criterion::TotalWorkouts(10),
    },
    AchievementRule {
        achievement: Achievement {
            id: THREE_DAY_STREAK,
            name: "3-Day Streak",
            description: "Worked out for 3 consecutive days",
        },
        criterion: Criterion::ConsecutiveDays(3),
    },
    AchievementRule {
        achievement: Achievement {
            id: WEEK_STREAK,
            name: "Week Streak",
            description: "Worked out for 7 consecutive days",
        },
        criterion: Criterion::ConsecutiveDays(7),
    },
];

/// Every rule, unlocked or not, in display order.
pub fn catalog() -> &'static [AchievementRule] {
    &RULES
}

pub fn evaluate(total_workouts: usize, max_consecutive_days: u32) -> Vec<Achievement> {
    RULES
        .iter()
        .filter(|rule| rule.is_met(total_workouts, max_consecutive_days))
        .map(|rule| rule.achievement)
        .collect()
}

pub fn evaluate_records(records: &[CompletionRecord]) -> Vec<Achievement> {
    evaluate(records.len(), longest_streak(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn ids(achievements: &[Achievement]) -> Vec<&'static str> {
        achievements.iter().map(|a| a.id).collect()
    }

    fn daily(start: NaiveDate, days: i64, step: i64) -> Vec<CompletionRecord> {
        (0..days)
            .map(|i| {
                let date = start + Duration::days(i * step);
                CompletionRecord::new(date.and_hms_opt(7, 30, 0).unwrap().and_utc().fixed_offset(), 2)
            })
            .collect()
    }

    #[test]
    fn nothing_unlocked_without_workouts() {
        assert!(evaluate(0, 0).is_empty());
        assert!(evaluate_records(&[]).is_empty());
    }

    #[test]
    fn five_spread_out_workouts() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = daily(start, 5, 3);
        assert_eq!(
            ids(&evaluate_records(&records)),
            vec![FIRST_WORKOUT, FIVE_WORKOUTS]
        );
    }

    #[test]
    fn three_consecutive_days_unlock_streak_badge() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = daily(start, 3, 1);
        assert_eq!(
            ids(&evaluate_records(&records)),
            vec![FIRST_WORKOUT, THREE_DAY_STREAK]
        );
    }

    #[test]
    fn thresholds_are_inclusive_and_independent() {
        assert_eq!(
            ids(&evaluate(10, 7)),
            vec![
                FIRST_WORKOUT,
                FIVE_WORKOUTS,
                TEN_WORKOUTS,
                THREE_DAY_STREAK,
                WEEK_STREAK
            ]
        );
        assert_eq!(ids(&evaluate(9, 6)), vec![FIRST_WORKOUT, FIVE_WORKOUTS, THREE_DAY_STREAK]);
    }

    #[test]
    fn old_run_still_counts_after_a_break() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut records = daily(start, 7, 1);
        records.push(CompletionRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap()
                .and_utc()
                .fixed_offset(),
            1,
        ));
        assert!(ids(&evaluate_records(&records)).contains(&WEEK_STREAK));
    }

    #[test]
    fn catalog_lists_every_badge_once() {
        let mut seen: Vec<&str> = catalog().iter().map(|r| r.achievement.id).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }
}
