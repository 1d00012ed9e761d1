//! Per-session holder of the signed-in user's completion history.
//!
//! The tracker owns what was loaded at the last `refresh` so that the
//! dashboard can redraw without touching the database, and drops it all on
//! sign-out.

use chrono::{DateTime, Local, NaiveDate};
use rusqlite::Connection;
use thiserror::Error;

use crate::db::repository::CompletionRepo;
use crate::models::{Achievement, Completion, CompletionRecord, DayBucket, ProgressSummary, User};
use crate::progress::{achievements, bucketing, estimated_calories, streak, summarize};

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("no user is signed in")]
    SignedOut,

    #[error("failed to load progress data: {0:#}")]
    Load(anyhow::Error),
}

#[derive(Debug, Default)]
pub struct ProgressTracker {
    user: Option<User>,
    completions: Vec<Completion>,
    records: Vec<CompletionRecord>,
    achievements: Vec<Achievement>,
    loaded_at: Option<DateTime<Local>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `user` and loads their history.
    pub fn sign_in(&mut self, conn: &Connection, user: User) -> Result<(), ProgressError> {
        self.sign_out();
        self.user = Some(user);
        self.refresh(conn)
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.completions.clear();
        self.records.clear();
        self.achievements.clear();
        self.loaded_at = None;
    }

    pub fn refresh(&mut self, conn: &Connection) -> Result<(), ProgressError> {
        let user = self.user.as_ref().ok_or(ProgressError::SignedOut)?;
        let completions = CompletionRepo::list_for_user(conn, user.id).map_err(ProgressError::Load)?;

        self.records = completions.iter().map(Completion::to_record).collect();
        self.achievements = achievements::evaluate_records(&self.records);
        self.completions = completions;
        self.loaded_at = Some(Local::now());

        log::debug!(
            "Loaded {} completions for '{}', {} achievements",
            self.completions.len(),
            user.username,
            self.achievements.len()
        );
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Newest first.
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn summary(&self, today: NaiveDate) -> ProgressSummary {
        summarize(&self.records, today)
    }

    pub fn month_chart(&self, today: NaiveDate) -> Vec<DayBucket> {
        bucketing::month_buckets(&self.records, today)
    }

    pub fn max_consecutive_days(&self) -> u32 {
        streak::longest_streak(&self.records)
    }

    pub fn estimated_calories(&self, kcal_per_minute: u32) -> u32 {
        estimated_calories(&self.completions, kcal_per_minute)
    }

    pub fn recent(&self, limit: usize) -> &[Completion] {
        &self.completions[..limit.min(self.completions.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;
    use crate::db::repository::{ExerciseRepo, UserRepo, WorkoutRepo};
    use crate::models::{ExerciseProgress, NewCompletion, NewWorkout, NewWorkoutExercise};
    use crate::progress::achievements::{FIRST_WORKOUT, THREE_DAY_STREAK};
    use chrono::{TimeZone, Utc};

    fn log_days(conn: &Connection, user: &User, days: &[u32]) {
        let workout = NewWorkout {
            name: "Circuit".into(),
            exercises: vec![NewWorkoutExercise::custom("Burpees")],
            ..Default::default()
        };
        let workout_id = WorkoutRepo::create(conn, user.id, &workout).unwrap();
        let burpees = ExerciseRepo::find_by_name(conn, "Burpees").unwrap().unwrap();

        for &day in days {
            let entry = ExerciseProgress {
                id: None,
                exercise_id: burpees.id,
                exercise_name: burpees.name.clone(),
                sets: 3,
                reps: 10,
                weight: None,
                duration_seconds: None,
            };
            let completion = NewCompletion {
                workout_id,
                completed_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
                duration_minutes: 20,
                difficulty_rating: 4,
                notes: None,
                exercises: vec![entry.clone(), entry],
            };
            CompletionRepo::record(conn, user.id, &completion).unwrap();
        }
    }

    #[test]
    fn refresh_requires_a_user() {
        let conn = open_test_db();
        let mut tracker = ProgressTracker::new();
        assert!(matches!(tracker.refresh(&conn), Err(ProgressError::SignedOut)));
        assert!(!tracker.is_loaded());
    }

    #[test]
    fn sign_in_loads_history() {
        let conn = open_test_db();
        let user = UserRepo::create(&conn, "morgan").unwrap();
        log_days(&conn, &user, &[6, 7, 8]);

        let mut tracker = ProgressTracker::new();
        tracker.sign_in(&conn, user).unwrap();

        assert!(tracker.is_loaded());
        assert_eq!(tracker.completions().len(), 3);
        assert!(tracker.records().iter().all(|r| r.exercise_count == 2));
        assert_eq!(tracker.max_consecutive_days(), 3);
        assert_eq!(tracker.estimated_calories(5), 300);

        let ids: Vec<&str> = tracker.achievements().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![FIRST_WORKOUT, THREE_DAY_STREAK]);

        let today = tracker.records()[0].local_date();
        let summary = tracker.summary(today);
        assert_eq!(summary.stats.total_workouts, 3);
        assert_eq!(summary.stats.current_streak, 3);
        assert_eq!(summary.week_total(), 6);
    }

    #[test]
    fn refresh_picks_up_new_completions() {
        let conn = open_test_db();
        let user = UserRepo::create(&conn, "quinn").unwrap();
        let mut tracker = ProgressTracker::new();
        tracker.sign_in(&conn, user.clone()).unwrap();
        assert!(tracker.completions().is_empty());
        assert!(tracker.achievements().is_empty());

        log_days(&conn, &user, &[1]);
        tracker.refresh(&conn).unwrap();
        assert_eq!(tracker.completions().len(), 1);
        assert_eq!(tracker.achievements().len(), 1);
    }

    #[test]
    fn sign_out_clears_everything() {
        let conn = open_test_db();
        let user = UserRepo::create(&conn, "drew").unwrap();
        log_days(&conn, &user, &[2, 9]);

        let mut tracker = ProgressTracker::new();
        tracker.sign_in(&conn, user).unwrap();
        tracker.sign_out();

        assert!(tracker.user().is_none());
        assert!(tracker.completions().is_empty());
        assert!(tracker.achievements().is_empty());
        assert!(!tracker.is_loaded());
    }

    #[test]
    fn recent_is_capped() {
        let conn = open_test_db();
        let user = UserRepo::create(&conn, "kai").unwrap();
        log_days(&conn, &user, &[1, 2, 3, 4, 5, 6, 7]);

        let mut tracker = ProgressTracker::new();
        tracker.sign_in(&conn, user).unwrap();
        assert_eq!(tracker.recent(5).len(), 5);
        assert_eq!(tracker.recent(50).len(), 7);
        assert!(tracker.recent(5)[0].completed_at > tracker.recent(5)[1].completed_at);

        let today = tracker.records()[0].local_date();
        let month = tracker.month_chart(today);
        assert_eq!(month.len(), 31);
        assert_eq!(month.iter().map(|b| b.exercise_count).sum::<u32>(), 14);
    }
}
