//! Summary of a packing outcome.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary statistics for a packed pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Total boxes requested.
    pub total_requested: usize,
    /// Total boxes packed.
    pub total_packed: usize,
    /// Sum of the packed boxes' volumes.
    pub packed_volume: i64,
    /// Volume of the pallet.
    pub pallet_volume: i64,
    /// Number of packing attempts performed.
    pub iterations: u64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Whether the search was cancelled early.
    pub cancelled: bool,
}

impl PackSummary {
    /// Returns true if every box was packed.
    pub fn all_placed(&self) -> bool {
        self.total_packed == self.total_requested
    }

    /// Number of boxes left out.
    pub fn unpacked_count(&self) -> usize {
        self.total_requested - self.total_packed
    }

    /// Utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.pallet_volume > 0 {
            self.packed_volume as f64 / self.pallet_volume as f64
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}
