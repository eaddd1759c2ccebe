//! Difficulty tiers and the search limits they map to.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors from parsing engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{found}', expected easy, medium or hard")]
    UnknownDifficulty { found: String },
}

/// Playing strength. Each tier fixes a wall-clock budget and a depth cap.
///
/// | Tier   | Budget  | Max depth |
/// |--------|---------|-----------|
/// | Easy   | 1000 ms | 3         |
/// | Medium | 2500 ms | 5         |
/// | Hard   | 5000 ms | 7         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn time_budget(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(1000),
            Difficulty::Medium => Duration::from_millis(2500),
            Difficulty::Hard => Duration::from_millis(5000),
        }
    }

    pub const fn max_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty { found: s.to_string() }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Limits for one call to [`find_best_move`](crate::find_best_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget after which the stop flag is raised.
    pub time_budget: Duration,
    /// Deepest iteration attempted.
    pub max_depth: u32,
    /// Root-move workers. Never less than one.
    pub threads: usize,
}

impl SearchConfig {
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        SearchConfig {
            time_budget: difficulty.time_budget(),
            max_depth: difficulty.max_depth(),
            threads: default_threads(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::from(Difficulty::default())
    }
}

/// Hardware concurrency, falling back to a single worker when it cannot be queried.
pub fn default_threads() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
