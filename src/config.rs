use crate::model::autoplay::DEFAULT_TICK_INTERVAL;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ts_rs::TS;

pub const DEFAULT_ROWS: usize = 100;
pub const DEFAULT_COLUMNS: usize = 100;

/// Settings chosen once when a session starts. The grid keeps these
/// dimensions for as long as the session lives.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct LifeConfig {
    pub rows: usize,
    pub columns: usize,
    /// Milliseconds between two autoplay steps
    pub tick_interval_ms: u32,
    /// Seed for the initial random grid, drawn from entropy when absent
    #[ts(type = "number | null")]
    pub seed: Option<u64>,
}

impl LifeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        LifeConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            seed: None,
        }
    }
}
