pub mod catalog;
pub mod generator;
pub mod library;
pub mod retry;

pub use generator::{PlanService, SimulatedPlanService};
pub use retry::{retry_with_backoff, RetryPolicy};

use crate::models::{NewWorkout, NewWorkoutExercise, PlanRequest, WorkoutPlan};

/// Turns a generated plan into a workout ready to be saved. Rest days drop out;
/// every exercise remembers the day and focus it was scheduled for.
pub fn plan_to_workout(plan: &WorkoutPlan, request: &PlanRequest) -> NewWorkout {
    let exercises = plan
        .weekly_schedule
        .iter()
        .flat_map(|day| {
            day.exercises.iter().map(move |e| NewWorkoutExercise {
                name: e.name.clone(),
                body_part: e.body_part.clone(),
                equipment: e.equipment.clone(),
                target: e.target.clone(),
                day: Some(day.day.clone()),
                focus: Some(day.focus.clone()),
                sets: e.sets,
                reps: e.reps,
                weight: None,
                duration_seconds: None,
            })
        })
        .collect();

    let training_days = plan.weekly_schedule.iter().filter(|d| !d.is_rest()).count();

    NewWorkout {
        name: format!("{} Plan", plan.goal),
        description: Some(plan.description.clone()),
        goal: Some(request.goal.as_str().to_string()),
        level: Some(request.level.as_str().to_string()),
        workouts_per_week: Some(training_days as u8),
        duration_label: None,
        exercises,
    }
}
