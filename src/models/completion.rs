use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A finished workout session as seen by the progress engine.
///
/// `completed_at` is the absolute instant paired with the local UTC offset
/// in force at that moment. Gaps and ordering use the instant; calendar days
/// come from the local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub completed_at: DateTime<FixedOffset>,
    pub exercise_count: u32,
}

impl CompletionRecord {
    pub fn new(completed_at: DateTime<FixedOffset>, exercise_count: u32) -> Self {
        Self {
            completed_at,
            exercise_count,
        }
    }

    pub fn local_date(&self) -> NaiveDate {
        self.completed_at.date_naive()
    }
}

/// One exercise logged as part of a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseProgress {
    pub id: Option<i64>,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<f64>,
    pub duration_seconds: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub id: i64,
    pub workout_id: i64,
    pub workout_name: String,
    pub completed_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub difficulty_rating: u8,
    pub notes: Option<String>,
    pub exercises: Vec<ExerciseProgress>,
}

impl Completion {
    pub fn to_record(&self) -> CompletionRecord {
        CompletionRecord {
            completed_at: self.completed_at.with_timezone(&Local).fixed_offset(),
            exercise_count: self.exercises.len() as u32,
        }
    }

    pub fn local_date_label(&self) -> String {
        self.completed_at
            .with_timezone(&Local)
            .format("%b %-d, %Y")
            .to_string()
    }
}

/// Everything needed to log a finished workout.
#[derive(Debug, Clone)]
pub struct NewCompletion {
    pub workout_id: i64,
    pub completed_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub difficulty_rating: u8,
    pub notes: Option<String>,
    pub exercises: Vec<ExerciseProgress>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_counts_logged_exercises() {
        let completion = Completion {
            id: 1,
            workout_id: 7,
            workout_name: "Push Day".to_string(),
            completed_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            duration_minutes: 45,
            difficulty_rating: 3,
            notes: None,
            exercises: vec![
                ExerciseProgress {
                    id: None,
                    exercise_id: 1,
                    exercise_name: "Push-ups".to_string(),
                    sets: 3,
                    reps: 12,
                    weight: None,
                    duration_seconds: None,
                };
                3
            ],
        };
        let record = completion.to_record();
        assert_eq!(record.exercise_count, 3);
        assert_eq!(record.completed_at, completion.completed_at);
        assert_eq!(
            record.local_date(),
            completion.completed_at.with_timezone(&Local).date_naive()
        );
    }

    #[test]
    fn empty_exercise_list_counts_as_zero() {
        let completion = Completion {
            id: 2,
            workout_id: 7,
            workout_name: "Rest".to_string(),
            completed_at: Utc::now(),
            duration_minutes: 10,
            difficulty_rating: 1,
            notes: Some("stretch only".to_string()),
            exercises: Vec::new(),
        };
        assert_eq!(completion.to_record().exercise_count, 0);
    }
}
