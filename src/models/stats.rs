use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summed exercise count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub exercise_count: u32,
}

impl DayBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            exercise_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestDay {
    /// "Mon D", or empty when nothing has been logged.
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_workouts: usize,
    pub current_streak: u32,
    pub best_day: BestDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniGraphPoint {
    pub day: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub stats: ProgressStats,
    pub mini_graph: Vec<MiniGraphPoint>,
}

impl ProgressSummary {
    pub fn week_total(&self) -> u32 {
        self.mini_graph.iter().map(|p| p.count).sum()
    }

    pub fn active_days(&self) -> usize {
        self.mini_graph.iter().filter(|p| p.count > 0).count()
    }

    pub fn peak(&self) -> u32 {
        self.mini_graph.iter().map(|p| p.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}
