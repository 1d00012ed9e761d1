use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Endurance,
    GeneralFitness,
}

impl Goal {
    pub fn all() -> Vec<Goal> {
        vec![
            Goal::WeightLoss,
            Goal::MuscleGain,
            Goal::Endurance,
            Goal::GeneralFitness,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::Endurance => "endurance",
            Goal::GeneralFitness => "general-fitness",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Endurance => "Endurance",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::WeightLoss => {
                "Burn fat and improve body composition through cardio and strength training."
            }
            Goal::MuscleGain => {
                "Build muscle mass and strength through progressive overload training."
            }
            Goal::Endurance => {
                "Improve cardiovascular fitness and stamina through endurance training."
            }
            Goal::GeneralFitness => "Enhance overall fitness and well-being with balanced workouts.",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Goal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "weight-loss" | "fat-loss" => Ok(Goal::WeightLoss),
            "muscle-gain" | "muscle" | "strength" => Ok(Goal::MuscleGain),
            "endurance" => Ok(Goal::Endurance),
            "general-fitness" | "general" => Ok(Goal::GeneralFitness),
            _ => Err(anyhow::anyhow!("Unknown goal: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn all() -> Vec<FitnessLevel> {
        vec![
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    /// Working sets prescribed per exercise at this level.
    pub fn default_sets(&self) -> i32 {
        match self {
            FitnessLevel::Beginner => 2,
            FitnessLevel::Intermediate => 3,
            FitnessLevel::Advanced => 4,
        }
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FitnessLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(anyhow::anyhow!("Unknown fitness level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Bodyweight,
    Basic,
    Full,
}

impl Equipment {
    pub fn all() -> Vec<Equipment> {
        vec![Equipment::Bodyweight, Equipment::Basic, Equipment::Full]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bodyweight",
            Equipment::Basic => "basic",
            Equipment::Full => "full",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight Only",
            Equipment::Basic => "Basic Equipment (Dumbbells, Resistance Bands)",
            Equipment::Full => "Full Gym Access",
        }
    }

    /// Whether an exercise needing `equipment` (library naming) is usable at this tier.
    pub fn allows(&self, equipment: &str) -> bool {
        let equipment = equipment.to_lowercase();
        match self {
            Equipment::Bodyweight => equipment == "body weight",
            Equipment::Basic => matches!(
                equipment.as_str(),
                "body weight" | "dumbbell" | "band" | "resistance band" | "kettlebell"
            ),
            Equipment::Full => true,
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Equipment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bodyweight" | "body-weight" | "none" => Ok(Equipment::Bodyweight),
            "basic" => Ok(Equipment::Basic),
            "full" | "gym" => Ok(Equipment::Full),
            _ => Err(anyhow::anyhow!("Unknown equipment option: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Strength,
    Cardio,
    Balanced,
}

impl Preference {
    pub fn all() -> Vec<Preference> {
        vec![Preference::Strength, Preference::Cardio, Preference::Balanced]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Strength => "strength",
            Preference::Cardio => "cardio",
            Preference::Balanced => "balanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Preference::Strength => "Strength Focus",
            Preference::Cardio => "Cardio Focus",
            Preference::Balanced => "Balanced",
        }
    }
}

impl FromStr for Preference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Preference::Strength),
            "cardio" => Ok(Preference::Cardio),
            "balanced" => Ok(Preference::Balanced),
            _ => Err(anyhow::anyhow!("Unknown preference: {}", s)),
        }
    }
}

pub const FREQUENCY_OPTIONS: [u8; 3] = [3, 4, 5];

/// Parameters handed to the plan generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub goal: Goal,
    pub level: FitnessLevel,
    pub equipment: Equipment,
    pub frequency: u8,
    pub preference: Preference,
}

impl PlanRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !FREQUENCY_OPTIONS.contains(&self.frequency) {
            anyhow::bail!(
                "Workout frequency must be one of 3, 4 or 5 days per week (got {})",
                self.frequency
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    pub sets: i32,
    pub reps: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub target_body_part: Option<String>,
    pub exercises: Vec<PlanExercise>,
}

impl PlanDay {
    pub fn is_rest(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub goal: String,
    pub description: String,
    pub weekly_schedule: Vec<PlanDay>,
    pub tips: Vec<String>,
}

impl WorkoutPlan {
    pub fn exercise_count(&self) -> usize {
        self.weekly_schedule.iter().map(|d| d.exercises.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_parses_aliases() {
        assert_eq!(Goal::from_str("Weight Loss").unwrap(), Goal::WeightLoss);
        assert_eq!(Goal::from_str("muscle_gain").unwrap(), Goal::MuscleGain);
        assert_eq!(Goal::from_str("general").unwrap(), Goal::GeneralFitness);
        assert!(Goal::from_str("yoga").is_err());
    }

    #[test]
    fn as_str_round_trips() {
        for goal in Goal::all() {
            assert_eq!(Goal::from_str(goal.as_str()).unwrap(), goal);
        }
        for level in FitnessLevel::all() {
            assert_eq!(FitnessLevel::from_str(level.as_str()).unwrap(), level);
        }
        for equipment in Equipment::all() {
            assert_eq!(Equipment::from_str(equipment.as_str()).unwrap(), equipment);
        }
        for preference in Preference::all() {
            assert_eq!(Preference::from_str(preference.as_str()).unwrap(), preference);
        }
    }

    #[test]
    fn equipment_tiers_are_nested() {
        assert!(Equipment::Bodyweight.allows("body weight"));
        assert!(!Equipment::Bodyweight.allows("dumbbell"));
        assert!(Equipment::Basic.allows("Dumbbell"));
        assert!(!Equipment::Basic.allows("barbell"));
        assert!(Equipment::Full.allows("barbell"));
    }

    #[test]
    fn frequency_must_be_offered_option() {
        let mut request = PlanRequest {
            goal: Goal::Endurance,
            level: FitnessLevel::Beginner,
            equipment: Equipment::Bodyweight,
            frequency: 4,
            preference: Preference::Cardio,
        };
        assert!(request.validate().is_ok());
        request.frequency = 7;
        assert!(request.validate().is_err());
    }
}
