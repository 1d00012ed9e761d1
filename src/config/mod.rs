pub mod settings;

pub use settings::{AppConfig, PlanConfig, ProgressConfig, ServicesConfig};
