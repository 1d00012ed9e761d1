//! Weekly plan generation.
//!
//! `SimulatedPlanService` stands in for a hosted plan generator: it picks a
//! goal template, trims it to the requested frequency and fills each training
//! day from the built-in exercise library.

use std::time::Duration;

use crate::config::ServicesConfig;
use crate::models::{Goal, PlanDay, PlanExercise, PlanRequest, Preference, WorkoutPlan};
use crate::plans::library;
use crate::plans::retry::ServiceError;

pub const EXERCISES_PER_DAY: usize = 4;

pub trait PlanService {
    fn generate(&self, request: &PlanRequest) -> Result<WorkoutPlan, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SimulatedPlanService {
    pub latency: Duration,
    pub timeout: Duration,
}

impl SimulatedPlanService {
    pub fn new(latency: Duration, timeout: Duration) -> Self {
        Self { latency, timeout }
    }

    pub fn from_config(services: &ServicesConfig) -> Self {
        Self::new(
            Duration::from_millis(services.simulated_latency_ms),
            Duration::from_millis(services.timeout_ms),
        )
    }
}

impl PlanService for SimulatedPlanService {
    fn generate(&self, request: &PlanRequest) -> Result<WorkoutPlan, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        if self.latency > self.timeout {
            std::thread::sleep(self.timeout);
            return Err(ServiceError::Timeout(self.timeout.as_millis() as u64));
        }
        std::thread::sleep(self.latency);

        let plan = build_plan(request);
        log::info!(
            "Generated {} plan: {} days, {} exercises",
            plan.goal,
            plan.weekly_schedule.len(),
            plan.exercise_count()
        );
        Ok(plan)
    }
}

struct Template {
    goal: &'static str,
    description: &'static str,
    days: [(&'static str, &'static str); 5],
    tips: &'static [&'static str],
}

const WEIGHT_LOSS: Template = Template {
    goal: "Weight Loss",
    description: "This plan combines HIIT (High-Intensity Interval Training) and strength training to maximize calorie burn and boost metabolism, helping you lose fat while preserving muscle mass.",
    days: [
        ("Monday", "Full Body HIIT"),
        ("Tuesday", "Lower Body Strength"),
        ("Wednesday", "Active Recovery"),
        ("Thursday", "Upper Body Strength"),
        ("Friday", "Cardio & Core"),
    ],
    tips: &[
        "Maintain a caloric deficit through diet and exercise",
        "Stay hydrated throughout the day",
        "Ensure you're getting adequate protein (1.6-2g per kg of bodyweight)",
        "Focus on sleep quality and stress management",
        "Track your workouts to ensure progressive overload",
    ],
};

const MUSCLE_GAIN: Template = Template {
    goal: "Muscle Gain",
    description: "This hypertrophy-focused plan emphasizes progressive overload and adequate volume, targeting all major muscle groups with sufficient frequency to stimulate muscle growth while allowing for recovery.",
    days: [
        ("Monday", "Chest & Triceps"),
        ("Tuesday", "Back & Biceps"),
        ("Wednesday", "Rest Day"),
        ("Thursday", "Legs & Core"),
        ("Friday", "Shoulders & Arms"),
    ],
    tips: &[
        "Eat in a caloric surplus (200-300 calories above maintenance)",
        "Consume 1.6-2.2g of protein per kg of bodyweight",
        "Focus on progressive overload by increasing weight or reps",
        "Get 7-9 hours of quality sleep for recovery",
        "Stay hydrated and consider creatine supplementation",
        "Rest at least 48 hours before training the same muscle group again",
    ],
};

const GENERAL_FITNESS: Template = Template {
    goal: "General Fitness",
    description: "This balanced plan improves overall fitness by incorporating cardio, strength training, and flexibility work. It's designed to enhance cardiovascular health, build functional strength, and improve mobility.",
    days: [
        ("Monday", "Full Body Strength"),
        ("Tuesday", "Cardio"),
        ("Wednesday", "Mobility & Core"),
        ("Thursday", "Upper Body Focus"),
        ("Friday", "Lower Body Focus"),
    ],
    tips: &[
        "Focus on form and technique over lifting heavy weights",
        "Aim for balanced nutrition with adequate protein (1.2-1.6g per kg)",
        "Stay consistent with your workout schedule",
        "Incorporate both strength and mobility work",
        "Track your progress to stay motivated",
        "Ensure you're getting adequate sleep and recovery",
    ],
};

fn template_for(goal: Goal) -> &'static Template {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS,
        Goal::MuscleGain => &MUSCLE_GAIN,
        Goal::Endurance | Goal::GeneralFitness => &GENERAL_FITNESS,
    }
}

const BASE_TARGETS: &[(&str, &str)] = &[
    ("Full Body", "back"),
    ("Upper Body", "upper arms"),
    ("Lower Body", "upper legs"),
    ("Chest & Triceps", "chest"),
    ("Back & Biceps", "back"),
    ("Shoulders & Arms", "upper arms"),
    ("Legs & Core", "upper legs"),
    ("Cardio & Core", "waist"),
    ("Cardio", "cardio"),
    ("Core", "waist"),
    ("Mobility & Core", "waist"),
];

const MUSCLE_GAIN_TARGETS: &[(&str, &str)] = &[
    ("Full Body", "back"),
    ("Upper Body", "chest"),
    ("Lower Body", "upper legs"),
    ("Chest & Triceps", "chest"),
    ("Back & Biceps", "back"),
    ("Shoulders & Arms", "upper arms"),
    ("Legs & Core", "upper legs"),
    ("Core", "waist"),
];

// Exact focus first, then the longest key the focus starts with
// ("Upper Body Strength" -> "Upper Body").
fn lookup(table: &[(&str, &'static str)], focus: &str) -> Option<&'static str> {
    if let Some((_, part)) = table.iter().find(|(key, _)| key.eq_ignore_ascii_case(focus)) {
        return Some(*part);
    }
    let focus = focus.to_lowercase();
    table
        .iter()
        .filter(|(key, _)| focus.starts_with(&key.to_lowercase()))
        .max_by_key(|(key, _)| key.len())
        .map(|(_, part)| *part)
}

/// Library body part trained on a day with the given focus.
pub fn target_body_part(focus: &str, goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => lookup(BASE_TARGETS, focus).unwrap_or("cardio"),
        Goal::MuscleGain => lookup(MUSCLE_GAIN_TARGETS, focus)
            .or_else(|| lookup(BASE_TARGETS, focus))
            .unwrap_or("back"),
        Goal::Endurance | Goal::GeneralFitness => lookup(BASE_TARGETS, focus).unwrap_or("back"),
    }
}

pub fn is_rest_focus(focus: &str) -> bool {
    let focus = focus.to_lowercase();
    focus.split_whitespace().any(|w| w == "rest") || focus.contains("recovery")
}

fn reps_for(preference: Preference) -> i32 {
    match preference {
        Preference::Strength => 8,
        Preference::Cardio => 15,
        Preference::Balanced => 12,
    }
}

/// Builds the plan synchronously. Deterministic for a given request.
pub fn build_plan(request: &PlanRequest) -> WorkoutPlan {
    let template = template_for(request.goal);
    let sets = request.level.default_sets();
    let reps = reps_for(request.preference);

    let weekly_schedule = template
        .days
        .iter()
        .take(request.frequency as usize)
        .map(|&(day, focus)| {
            if is_rest_focus(focus) {
                return PlanDay {
                    day: day.to_string(),
                    focus: focus.to_string(),
                    target_body_part: None,
                    exercises: Vec::new(),
                };
            }

            let body_part = target_body_part(focus, request.goal);
            let exercises = library::by_body_part(body_part)
                .filter(|e| request.equipment.allows(e.equipment))
                .take(EXERCISES_PER_DAY)
                .map(|e| PlanExercise {
                    name: e.name.to_string(),
                    body_part: e.body_part.to_string(),
                    equipment: e.equipment.to_string(),
                    target: e.target.to_string(),
                    sets,
                    reps,
                    notes: Some(e.description.to_string()),
                })
                .collect();

            PlanDay {
                day: day.to_string(),
                focus: focus.to_string(),
                target_body_part: Some(body_part.to_string()),
                exercises,
            }
        })
        .collect();

    WorkoutPlan {
        goal: template.goal.to_string(),
        description: template.description.to_string(),
        weekly_schedule,
        tips: template.tips.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Equipment, FitnessLevel};

    fn request(goal: Goal, equipment: Equipment, frequency: u8) -> PlanRequest {
        PlanRequest {
            goal,
            level: FitnessLevel::Intermediate,
            equipment,
            frequency,
            preference: Preference::Balanced,
        }
    }

    #[test]
    fn goal_selects_template() {
        assert_eq!(build_plan(&request(Goal::WeightLoss, Equipment::Full, 5)).goal, "Weight Loss");
        assert_eq!(build_plan(&request(Goal::MuscleGain, Equipment::Full, 5)).goal, "Muscle Gain");
        assert_eq!(
            build_plan(&request(Goal::Endurance, Equipment::Full, 5)).goal,
            "General Fitness"
        );
    }

    #[test]
    fn frequency_trims_schedule() {
        let plan = build_plan(&request(Goal::GeneralFitness, Equipment::Full, 3));
        let days: Vec<&str> = plan.weekly_schedule.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["Monday", "Tuesday", "Wednesday"]);
    }

    #[test]
    fn rest_days_stay_empty() {
        let plan = build_plan(&request(Goal::MuscleGain, Equipment::Full, 5));
        let wednesday = &plan.weekly_schedule[2];
        assert_eq!(wednesday.focus, "Rest Day");
        assert!(wednesday.is_rest());
        assert!(wednesday.target_body_part.is_none());

        let plan = build_plan(&request(Goal::WeightLoss, Equipment::Full, 5));
        assert!(plan.weekly_schedule[2].is_rest());
    }

    #[test]
    fn days_are_filled_from_target_body_part() {
        let plan = build_plan(&request(Goal::MuscleGain, Equipment::Full, 5));
        let monday = &plan.weekly_schedule[0];
        assert_eq!(monday.target_body_part.as_deref(), Some("chest"));
        assert!(!monday.exercises.is_empty());
        assert!(monday.exercises.len() <= EXERCISES_PER_DAY);
        assert!(monday.exercises.iter().all(|e| e.body_part == "chest"));
    }

    #[test]
    fn bodyweight_plans_only_use_body_weight() {
        for goal in Goal::all() {
            let plan = build_plan(&request(goal, Equipment::Bodyweight, 5));
            for day in plan.weekly_schedule.iter().filter(|d| !is_rest_focus(&d.focus)) {
                assert!(!day.exercises.is_empty(), "{} had no exercises", day.focus);
                assert!(day.exercises.iter().all(|e| e.equipment == "body weight"));
            }
        }
    }

    #[test]
    fn level_and_preference_set_volume() {
        let mut req = request(Goal::GeneralFitness, Equipment::Full, 3);
        req.level = FitnessLevel::Beginner;
        req.preference = Preference::Strength;
        let plan = build_plan(&req);
        let first = &plan.weekly_schedule[0].exercises[0];
        assert_eq!((first.sets, first.reps), (2, 8));

        req.level = FitnessLevel::Advanced;
        req.preference = Preference::Cardio;
        let plan = build_plan(&req);
        let first = &plan.weekly_schedule[0].exercises[0];
        assert_eq!((first.sets, first.reps), (4, 15));
    }

    #[test]
    fn focus_mapping_per_goal() {
        assert_eq!(target_body_part("Upper Body", Goal::MuscleGain), "chest");
        assert_eq!(target_body_part("Upper Body", Goal::GeneralFitness), "upper arms");
        assert_eq!(target_body_part("Cardio & Core", Goal::MuscleGain), "waist");
        assert_eq!(target_body_part("Yoga", Goal::WeightLoss), "cardio");
        assert_eq!(target_body_part("Yoga", Goal::GeneralFitness), "back");
        assert_eq!(target_body_part("Lower Body Focus", Goal::Endurance), "upper legs");
        assert_eq!(target_body_part("Cardio & Core", Goal::WeightLoss), "waist");
    }

    #[test]
    fn latency_past_timeout_fails() {
        let service = SimulatedPlanService::new(Duration::from_millis(20), Duration::from_millis(5));
        let err = service
            .generate(&request(Goal::WeightLoss, Equipment::Basic, 4))
            .unwrap_err();
        assert_eq!(err, ServiceError::Timeout(5));

        let service = SimulatedPlanService::new(Duration::ZERO, Duration::from_millis(5));
        let plan = service
            .generate(&request(Goal::WeightLoss, Equipment::Basic, 4))
            .unwrap();
        assert_eq!(plan.weekly_schedule.len(), 4);
    }

    #[test]
    fn invalid_frequency_is_rejected() {
        let service = SimulatedPlanService::new(Duration::ZERO, Duration::from_millis(5));
        let err = service
            .generate(&request(Goal::WeightLoss, Equipment::Basic, 6))
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }
}
