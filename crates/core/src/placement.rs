//! Placement of a packed box within a pallet.

use crate::dimension::Dim3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a box was packed and in which orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingData {
    /// Box dimensions after rotation. Equal to the original dimensions when
    /// the orientation did not change.
    pub packed_dimensions: Dim3,

    /// Minimum corner of the box in pallet coordinates.
    pub packed_location: Dim3,
}

impl PackingData {
    /// Creates new packing data.
    pub fn new(packed_dimensions: Dim3, packed_location: Dim3) -> Self {
        Self {
            packed_dimensions,
            packed_location,
        }
    }

    /// Returns the maximum corner of the box.
    pub fn max_corner(&self) -> Dim3 {
        Dim3::new(
            self.packed_location.x + self.packed_dimensions.x,
            self.packed_location.y + self.packed_dimensions.y,
            self.packed_location.z + self.packed_dimensions.z,
        )
    }

    /// Returns `(min, max)` corners.
    pub fn bounds(&self) -> (Dim3, Dim3) {
        (self.packed_location, self.max_corner())
    }

    /// Returns true if the two placed boxes share interior volume.
    pub fn overlaps(&self, other: &PackingData) -> bool {
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        a_min.x < b_max.x
            && b_min.x < a_max.x
            && a_min.y < b_max.y
            && b_min.y < a_max.y
            && a_min.z < b_max.z
            && b_min.z < a_max.z
    }
}

impl fmt::Display for PackingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dim={} at={}", self.packed_dimensions, self.packed_location)
    }
}
