use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{Equipment, FitnessLevel, Goal, PlanRequest, Preference};

fn default_goal() -> Goal {
    Goal::GeneralFitness
}
fn default_level() -> FitnessLevel {
    FitnessLevel::Beginner
}
fn default_equipment() -> Equipment {
    Equipment::Bodyweight
}
fn default_frequency() -> u8 {
    3
}
fn default_preference() -> Preference {
    Preference::Balanced
}
fn default_max_retries() -> u32 {
    3
}
fn default_retry_delay_ms() -> u64 {
    1000
}
fn default_timeout_ms() -> u64 {
    10_000
}
fn default_simulated_latency_ms() -> u64 {
    250
}
fn default_calories_per_minute() -> u32 {
    5
}
fn default_history_limit() -> usize {
    5
}

/// Answers pre-selected in the plan wizard and used by `plan` when flags are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_goal")]
    pub goal: Goal,
    #[serde(default = "default_level")]
    pub level: FitnessLevel,
    #[serde(default = "default_equipment")]
    pub equipment: Equipment,
    #[serde(default = "default_frequency")]
    pub frequency: u8,
    #[serde(default = "default_preference")]
    pub preference: Preference,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
            level: default_level(),
            equipment: default_equipment(),
            frequency: default_frequency(),
            preference: default_preference(),
        }
    }
}

impl From<&PlanRequest> for PlanConfig {
    fn from(request: &PlanRequest) -> Self {
        Self {
            goal: request.goal,
            level: request.level,
            equipment: request.equipment,
            frequency: request.frequency,
            preference: request.preference,
        }
    }
}

impl PlanConfig {
    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            goal: self.goal,
            level: self.level,
            equipment: self.equipment,
            frequency: self.frequency,
            preference: self.preference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// How long the local plan generator pretends to think.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_ms: default_timeout_ms(),
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_calories_per_minute")]
    pub calories_per_minute: u32,
    /// Completions shown before "view more".
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            calories_per_minute: default_calories_per_minute(),
            history_limit: default_history_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "fitpulse")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("fitpulse.db"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
