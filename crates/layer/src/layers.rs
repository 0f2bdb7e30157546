//! Candidate layer thicknesses and their ranking.
//!
//! A layer thickness is taken from one of a box's dimensions. Its score is
//! the sum, over every other box, of the smallest difference between the
//! thickness and any of that box's dimensions; a low score means many boxes
//! have a side close to the thickness.

use crate::geometry::CargoBox;
use palletpack_core::Dim3;
use std::fmt;

/// A candidate layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    /// Layer thickness along `y`.
    pub thickness: i64,
    /// Sum of the other boxes' smallest differences to the thickness.
    pub score: i64,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dim={} val={}", self.thickness, self.score)
    }
}

/// Returns true if `dims` fits in `space` with its footprint as is or turned
/// by 90 degrees around `y`.
pub fn fits_with_footprint_turn(dims: &Dim3, space: &Dim3) -> bool {
    dims.y <= space.y
        && ((dims.x <= space.x && dims.z <= space.z) || (dims.z <= space.x && dims.x <= space.z))
}

/// Score of a thickness over `candidates`, leaving out the box at `exclude`.
pub fn min_diff_total(
    boxes: &[CargoBox],
    candidates: &[usize],
    exclude: usize,
    thickness: i64,
) -> i64 {
    candidates
        .iter()
        .filter(|&&i| i != exclude)
        .map(|&i| boxes[i].dimensions().min_abs_diff(thickness))
        .sum()
}

/// Builds the ranked list of starting layers for a pallet orientation.
///
/// Every height-axis variant of every box that fits the pallet contributes
/// its `y` as a thickness; repeated thicknesses keep the first score found.
/// The result is sorted by ascending score, ties in discovery order.
pub fn create_layers(boxes: &[CargoBox], pallet: Dim3) -> Vec<Layer> {
    let all: Vec<usize> = (0..boxes.len()).collect();
    let mut layers: Vec<Layer> = Vec::new();
    for (index, cargo) in boxes.iter().enumerate() {
        for variant in cargo.dimensions().height_axis_variants() {
            if !fits_with_footprint_turn(&variant, &pallet) {
                continue;
            }
            if layers.iter().any(|l| l.thickness == variant.y) {
                continue;
            }
            layers.push(Layer {
                thickness: variant.y,
                score: min_diff_total(boxes, &all, index, variant.y),
            });
        }
    }
    layers.sort_by_key(|l| l.score);
    layers
}

/// Picks the next layer thickness for the boxes still to pack.
///
/// Only variants fitting `space` count. Returns the lowest scoring
/// thickness, the first one on ties, or 0 if no variant fits.
pub fn find_layer(boxes: &[CargoBox], remaining: &[usize], space: Dim3) -> i64 {
    let mut thickness = 0;
    let mut best_score = i64::MAX;
    for &index in remaining {
        for variant in boxes[index].dimensions().height_axis_variants() {
            if !fits_with_footprint_turn(&variant, &space) {
                continue;
            }
            let score = min_diff_total(boxes, remaining, index, variant.y);
            if score < best_score {
                best_score = score;
                thickness = variant.y;
            }
        }
    }
    thickness
}
