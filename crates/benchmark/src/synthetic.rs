//! Synthetic dataset generator.
//!
//! Both generators produce boxes that together fill the pallet exactly, so a
//! perfect packing is known to exist.

use crate::dataset::{Dataset, Item};
use rand::prelude::*;

/// Generator for synthetic pallet datasets.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator {
    /// Creates a new generator with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Tiles the pallet with cubes of the given side.
    ///
    /// Each pallet dimension is rounded down to a multiple of `side`.
    pub fn cube_tiling(pallet: [i64; 3], side: i64) -> Dataset {
        let side = side.max(1);
        let per_axis = pallet.map(|d| (d / side).max(1));
        let pallet = per_axis.map(|n| n * side);
        let quantity = per_axis.iter().product::<i64>() as usize;

        Dataset {
            name: format!("cubes_{}", side),
            pallet,
            items: vec![Item {
                id: "cube".to_string(),
                dimensions: [side; 3],
                quantity,
            }],
        }
    }

    /// Cuts the pallet into `pieces` boxes with random guillotine cuts.
    ///
    /// The largest remaining box is split each step, along a random axis
    /// that is at least 2 long. Stops early once no box can be split.
    pub fn guillotine(&mut self, pallet: [i64; 3], pieces: usize) -> Dataset {
        let mut parts: Vec<[i64; 3]> = vec![pallet];
        while parts.len() < pieces {
            let Some(index) = (0..parts.len())
                .filter(|&i| parts[i].iter().any(|&d| d >= 2))
                .max_by_key(|&i| parts[i].iter().product::<i64>())
            else {
                break;
            };

            let part = parts.swap_remove(index);
            let axes: Vec<usize> = (0..3).filter(|&a| part[a] >= 2).collect();
            let Some(&axis) = axes.choose(&mut self.rng) else {
                parts.push(part);
                break;
            };
            let cut = self.rng.gen_range(1..part[axis]);

            let mut first = part;
            let mut second = part;
            first[axis] = cut;
            second[axis] = part[axis] - cut;
            parts.push(first);
            parts.push(second);
        }

        let items = parts
            .into_iter()
            .enumerate()
            .map(|(i, dimensions)| Item {
                id: format!("g{}", i),
                dimensions,
                quantity: 1,
            })
            .collect();

        Dataset {
            name: format!("guillotine_{}", pieces),
            pallet,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(d: [i64; 3]) -> i64 {
        d.iter().product()
    }

    #[test]
    fn test_cube_tiling_fills_pallet() {
        let dataset = SyntheticGenerator::cube_tiling([40, 30, 20], 10);
        assert_eq!(dataset.items[0].quantity, 4 * 3 * 2);
        assert_eq!(dataset.total_volume(), volume(dataset.pallet));
    }

    #[test]
    fn test_cube_tiling_rounds_pallet_down() {
        let dataset = SyntheticGenerator::cube_tiling([45, 30, 25], 10);
        assert_eq!(dataset.pallet, [40, 30, 20]);
        assert_eq!(dataset.total_volume(), volume(dataset.pallet));
    }

    #[test]
    fn test_guillotine_fills_pallet() {
        let mut generator = SyntheticGenerator::with_seed(7);
        let dataset = generator.guillotine([100, 80, 60], 25);

        assert_eq!(dataset.items.len(), 25);
        assert_eq!(dataset.total_volume(), volume([100, 80, 60]));
        assert!(dataset
            .items
            .iter()
            .all(|i| i.dimensions.iter().all(|&d| d >= 1)));
    }

    #[test]
    fn test_guillotine_stops_at_unit_boxes() {
        let mut generator = SyntheticGenerator::with_seed(1);
        let dataset = generator.guillotine([2, 1, 1], 10);
        assert_eq!(dataset.items.len(), 2);
        assert!(dataset.items.iter().all(|i| i.dimensions == [1, 1, 1]));
    }

    #[test]
    fn test_guillotine_is_reproducible() {
        let a = SyntheticGenerator::with_seed(42).guillotine([50, 50, 50], 12);
        let b = SyntheticGenerator::with_seed(42).guillotine([50, 50, 50], 12);
        let dims = |d: &Dataset| d.items.iter().map(|i| i.dimensions).collect::<Vec<_>>();
        assert_eq!(dims(&a), dims(&b));
    }
}
