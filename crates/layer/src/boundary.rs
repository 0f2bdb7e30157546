//! Pallet boundary.

use palletpack_core::{Dim3, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed-size container boxes are packed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pallet {
    /// Dimensions (width, height, depth).
    dimensions: Dim3,
}

impl Pallet {
    /// Creates a new pallet with the given dimensions.
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self {
            dimensions: Dim3::new(x, y, z),
        }
    }

    /// Returns the dimensions.
    pub fn dimensions(&self) -> Dim3 {
        self.dimensions
    }

    /// Pallet volume.
    pub fn volume(&self) -> i64 {
        self.dimensions.volume()
    }

    /// Checks that every dimension is positive and the volume fits in `i64`.
    pub fn validate(&self) -> Result<()> {
        let d = self.dimensions;
        if d.x <= 0 || d.y <= 0 || d.z <= 0 {
            return Err(Error::InvalidBoundary(format!(
                "All pallet dimensions must be positive, got {}",
                d
            )));
        }
        if d.checked_volume().is_none() {
            return Err(Error::InvalidBoundary(format!(
                "Pallet volume of {} overflows",
                d
            )));
        }
        Ok(())
    }
}

impl From<Dim3> for Pallet {
    fn from(dimensions: Dim3) -> Self {
        Self { dimensions }
    }
}
