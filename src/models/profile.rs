use serde::{Deserialize, Serialize};

use crate::models::{FitnessLevel, Goal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub full_name: Option<String>,
    pub fitness_level: Option<FitnessLevel>,
    pub goal: Option<Goal>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
}

impl Profile {
    pub fn empty(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub fitness_level: Option<FitnessLevel>,
    pub goal: Option<Goal>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.full_name {
            profile.full_name = Some(name);
        }
        if let Some(level) = self.fitness_level {
            profile.fitness_level = Some(level);
        }
        if let Some(goal) = self.goal {
            profile.goal = Some(goal);
        }
        if let Some(weight) = self.weight_kg {
            profile.weight_kg = Some(weight);
        }
        if let Some(height) = self.height_cm {
            profile.height_cm = Some(height);
        }
        if let Some(age) = self.age {
            profile.age = Some(age);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.fitness_level.is_none()
            && self.goal.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.age.is_none()
    }
}
