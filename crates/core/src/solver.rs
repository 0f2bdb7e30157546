//! Solver traits and configuration.

use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for packing solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,

    /// Run the starting layers of each pallet rotation concurrently.
    pub parallel: bool,

    /// Keep trying pallet rotations even when the pallet is a cube.
    pub try_all_rotations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_limit_ms: 0,
            parallel: false,
            try_all_rotations: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Enables or disables parallel attempts.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables the cube pallet shortcut.
    pub fn with_try_all_rotations(mut self, enabled: bool) -> Self {
        self.try_all_rotations = enabled;
        self
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information reported after each packing attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressInfo {
    /// Number of attempts performed so far.
    pub iterations: u64,
    /// Best packed volume so far.
    pub best_volume: i64,
    /// Volume of the pallet.
    pub pallet_volume: i64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Whether the solver is still running.
    pub running: bool,
}

impl ProgressInfo {
    /// Best utilization so far (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.pallet_volume > 0 {
            self.best_volume as f64 / self.pallet_volume as f64
        } else {
            0.0
        }
    }
}

/// Trait for packing solvers.
pub trait Solver {
    /// The item type this solver packs.
    type Item;
    /// The container type this solver packs into.
    type Container;
    /// The outcome of a solve.
    type Output;

    /// Solves the packing problem.
    ///
    /// Returns `Ok(None)` when there is nothing to pack.
    fn solve(&self, items: &[Self::Item], container: &Self::Container)
        -> Result<Option<Self::Output>>;

    /// Solves with a progress callback.
    fn solve_with_progress(
        &self,
        items: &[Self::Item],
        container: &Self::Container,
        callback: ProgressCallback,
    ) -> Result<Option<Self::Output>>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}
