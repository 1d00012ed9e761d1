use serde::{Deserialize, Serialize};

/// A library exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    pub difficulty_level: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: i64,
    pub exercise_id: i64,
    pub name: String,
    pub body_part: String,
    pub day: Option<String>,
    pub focus: Option<String>,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<f64>,
    pub duration_seconds: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub level: Option<String>,
    pub workouts_per_week: Option<u8>,
    pub duration_label: Option<String>,
    pub created_at: String,
    pub last_performed: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutExercise {
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    pub day: Option<String>,
    pub focus: Option<String>,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<f64>,
    pub duration_seconds: Option<i32>,
}

impl NewWorkoutExercise {
    /// A custom exercise entry with default prescription (3 x 10).
    pub fn custom(name: &str) -> Self {
        Self {
            name: name.to_string(),
            body_part: String::new(),
            equipment: String::new(),
            target: String::new(),
            day: None,
            focus: None,
            sets: 3,
            reps: 10,
            weight: None,
            duration_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewWorkout {
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub level: Option<String>,
    pub workouts_per_week: Option<u8>,
    pub duration_label: Option<String>,
    pub exercises: Vec<NewWorkoutExercise>,
}

impl NewWorkout {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Please enter a workout name");
        }
        for ex in &self.exercises {
            if ex.name.trim().is_empty() {
                anyhow::bail!("Exercise names cannot be empty");
            }
            if ex.sets <= 0 || ex.reps <= 0 {
                anyhow::bail!("Sets and reps must be positive for '{}'", ex.name);
            }
        }
        Ok(())
    }
}
