use crate::error::{SchedulerError, SchedulerResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Period colors used when drawing a colored conflict graph.
pub const DEFAULT_PERIOD_COLORS: [&str; 10] = [
    "Yellow", "Red", "Green", "LightBlue", "Pink", "White", "Brown", "Black", "Gray", "Orange",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Record count at which graph construction switches to sharded parallel extraction.
    pub parallel_threshold: usize,
    /// Records per shard for parallel extraction. Must be non-zero.
    pub shard_size: usize,
    /// Color name per period; reused cyclically when there are more periods than names.
    pub period_colors: Vec<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10_000,
            shard_size: 1_024,
            period_colors: DEFAULT_PERIOD_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl SchedulerConfig {
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> SchedulerResult<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SchedulerResult<()> {
        if self.shard_size == 0 {
            return Err(SchedulerError::InvalidConfig(
                "shard_size must be greater than zero".to_string(),
            ));
        }
        if self.period_colors.is_empty() {
            return Err(SchedulerError::InvalidConfig(
                "period_colors must name at least one color".to_string(),
            ));
        }
        if let Some(pos) = self.period_colors.iter().position(|c| c.trim().is_empty()) {
            return Err(SchedulerError::InvalidConfig(format!(
                "period_colors entry #{pos} is blank"
            )));
        }
        Ok(())
    }

    pub fn color_for_period(&self, period: usize) -> &str {
        if self.period_colors.is_empty() {
            return DEFAULT_PERIOD_COLORS[period % DEFAULT_PERIOD_COLORS.len()];
        }
        &self.period_colors[period % self.period_colors.len()]
    }
}
