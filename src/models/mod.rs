pub mod completion;
pub mod plan;
pub mod profile;
pub mod stats;
pub mod workout;

pub use completion::{Completion, CompletionRecord, ExerciseProgress, NewCompletion};
pub use plan::{
    Equipment, FitnessLevel, Goal, FREQUENCY_OPTIONS, PlanDay, PlanExercise, PlanRequest, Preference, WorkoutPlan,
};
pub use profile::{Profile, ProfileUpdate, User};
pub use stats::{Achievement, BestDay, DayBucket, MiniGraphPoint, ProgressStats, ProgressSummary};
pub use workout::{Exercise, NewWorkout, NewWorkoutExercise, Workout, WorkoutExercise};
