//! Box geometry.

use palletpack_core::{Dim3, Error, PackingData, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box that can be packed onto a pallet.
///
/// Two boxes with equal dimensions and even equal ids are still packed
/// independently; the packer tracks boxes by their position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoBox {
    /// Caller supplied label.
    id: String,

    /// Original dimensions.
    dimensions: Dim3,

    /// Location and rotated dimensions, `None` until packed.
    packing_data: Option<PackingData>,
}

impl CargoBox {
    /// Creates a new box with the given id and dimensions.
    pub fn new(id: impl Into<String>, x: i64, y: i64, z: i64) -> Self {
        Self::with_dimensions(id, Dim3::new(x, y, z))
    }

    /// Creates a new box from a dimension vector.
    pub fn with_dimensions(id: impl Into<String>, dimensions: Dim3) -> Self {
        Self {
            id: id.into(),
            dimensions,
            packing_data: None,
        }
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the original dimensions.
    pub fn dimensions(&self) -> Dim3 {
        self.dimensions
    }

    /// Returns the packing data, if the box was packed.
    pub fn packing_data(&self) -> Option<&PackingData> {
        self.packing_data.as_ref()
    }

    /// Returns true if the box was packed.
    pub fn is_packed(&self) -> bool {
        self.packing_data.is_some()
    }

    /// Volume of the original dimensions.
    pub fn volume(&self) -> i64 {
        self.dimensions.volume()
    }

    pub(crate) fn set_packing_data(&mut self, data: PackingData) {
        self.packing_data = Some(data);
    }

    pub(crate) fn clear_packing_data(&mut self) {
        self.packing_data = None;
    }

    /// Checks that every dimension is positive and the volume fits in `i64`.
    pub fn validate(&self) -> Result<()> {
        let d = self.dimensions;
        if d.x <= 0 || d.y <= 0 || d.z <= 0 {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions for '{}' must be positive, got {}",
                self.id, d
            )));
        }
        if d.checked_volume().is_none() {
            return Err(Error::InvalidGeometry(format!(
                "Volume of '{}' ({}) overflows",
                self.id, d
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CargoBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.packing_data {
            Some(data) => write!(f, "dim={} packed={}", self.dimensions, data),
            None => write!(f, "dim={} not packed", self.dimensions),
        }
    }
}
