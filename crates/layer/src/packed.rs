//! Outcome of a packing attempt.

use crate::geometry::CargoBox;
use palletpack_core::{Dim3, PackSummary};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pallet with the boxes that were and were not packed onto it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedPallet {
    /// Pallet dimensions in the orientation used for packing.
    pub pallet_dimensions: Dim3,

    /// Packed boxes in placement order, each carrying its packing data.
    pub packed_boxes: Vec<CargoBox>,

    /// Boxes that could not be packed.
    pub not_packed_boxes: Vec<CargoBox>,

    /// Sum of the packed boxes' original volumes.
    pub packed_volume: i64,

    /// Number of attempts the search performed.
    pub iterations: u64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Whether the search was cancelled early.
    pub cancelled: bool,
}

impl PackedPallet {
    /// Returns true if no box is left, or the pallet is completely full.
    ///
    /// A full pallet counts as all packed even when boxes remain, since
    /// nothing more can be placed on it.
    pub fn all_packed(&self) -> bool {
        self.not_packed_boxes.is_empty() || self.packed_volume == self.pallet_dimensions.volume()
    }

    /// Utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let volume = self.pallet_dimensions.volume();
        if volume > 0 {
            self.packed_volume as f64 / volume as f64
        } else {
            0.0
        }
    }

    /// Computes summary statistics.
    pub fn summary(&self) -> PackSummary {
        PackSummary {
            total_requested: self.packed_boxes.len() + self.not_packed_boxes.len(),
            total_packed: self.packed_boxes.len(),
            packed_volume: self.packed_volume,
            pallet_volume: self.pallet_dimensions.volume(),
            iterations: self.iterations,
            time_ms: self.computation_time_ms,
            cancelled: self.cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pallet(packed: Vec<CargoBox>, not_packed: Vec<CargoBox>) -> PackedPallet {
        let packed_volume = packed.iter().map(CargoBox::volume).sum();
        PackedPallet {
            pallet_dimensions: Dim3::new(10, 10, 10),
            packed_boxes: packed,
            not_packed_boxes: not_packed,
            packed_volume,
            iterations: 1,
            computation_time_ms: 0,
            cancelled: false,
        }
    }

    #[test]
    fn test_all_packed_when_nothing_left() {
        let p = pallet(vec![CargoBox::new("A", 5, 5, 5)], vec![]);
        assert!(p.all_packed());
        assert_eq!(p.utilization(), 0.125);
    }

    #[test]
    fn test_all_packed_when_pallet_full() {
        let p = pallet(
            vec![CargoBox::new("A", 10, 10, 10)],
            vec![CargoBox::new("B", 1, 1, 1)],
        );
        assert!(p.all_packed());
        assert!(!p.summary().all_placed());
    }

    #[test]
    fn test_not_all_packed() {
        let p = pallet(
            vec![CargoBox::new("A", 5, 5, 5)],
            vec![CargoBox::new("B", 1, 1, 1)],
        );
        assert!(!p.all_packed());
        let summary = p.summary();
        assert_eq!(summary.total_requested, 2);
        assert_eq!(summary.unpacked_count(), 1);
    }
}
