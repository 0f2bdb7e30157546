//! Best-fit box selection for a skyline valley.

use crate::geometry::CargoBox;
use palletpack_core::Dim3;

/// A box and the rotation chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedBox {
    /// Index of the box in the attempt's box list.
    pub index: usize,
    /// Dimensions of the chosen rotation.
    pub packed_dimensions: Dim3,
    /// Absolute difference between the ideal space and the chosen rotation.
    pub delta: Dim3,
    /// True if the rotation is no taller than the layer.
    pub fits_in_layer: bool,
}

impl SelectedBox {
    /// Returns true if a candidate with the given parameters beats `self`.
    ///
    /// Fitting in the layer comes first, then the smallest delta on `y`,
    /// then `x`, then `z`. Equal candidates do not replace `self`.
    pub fn is_better_fit(&self, fits_in_layer: bool, delta: Dim3) -> bool {
        if fits_in_layer != self.fits_in_layer {
            return fits_in_layer;
        }
        (delta.y, delta.x, delta.z) < (self.delta.y, self.delta.x, self.delta.z)
    }
}

/// Finds the unpacked box and rotation closest to `ideal` among those that
/// fit inside `maximum`.
///
/// `candidates` are indices into `boxes`, scanned in order; rotations are
/// scanned in [`Dim3::rotations`] order. The first of equally good options
/// wins. Returns `None` if no rotation of any candidate fits.
pub fn find_box(
    boxes: &[CargoBox],
    candidates: &[usize],
    ideal: Dim3,
    maximum: Dim3,
) -> Option<SelectedBox> {
    let mut found: Option<SelectedBox> = None;
    for &index in candidates {
        let dims = boxes[index].dimensions();
        for rotation in dims.rotations().filter(|r| maximum.contains(r)) {
            let fits_in_layer = rotation.y <= ideal.y;
            let delta = ideal.absolute_diff(&rotation);
            if found
                .as_ref()
                .map_or(true, |best| best.is_better_fit(fits_in_layer, delta))
            {
                found = Some(SelectedBox {
                    index,
                    packed_dimensions: rotation,
                    delta,
                    fits_in_layer,
                });
            }
            // Every rotation of a cube is the same.
            if dims.is_cube() {
                break;
            }
        }
    }
    found
}
