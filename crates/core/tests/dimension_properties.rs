//! Property-based invariant tests for `Dim3`.
//!
//! 1. `rotations()` yields six permutations, including the vector itself once
//!    (exactly once when all components differ).
//! 2. `height_axis_variants()` puts each component on the `y` axis once.
//! 3. `absolute_diff` against itself is zero; `contains` is reflexive.
//! 4. Every rotation keeps the volume.

use palletpack_core::Dim3;
use proptest::prelude::*;

fn dim_strategy() -> impl Strategy<Value = Dim3> {
    (1i64..=1000, 1i64..=1000, 1i64..=1000).prop_map(|(x, y, z)| Dim3::new(x, y, z))
}

fn sorted(d: &Dim3) -> [i64; 3] {
    let mut a = d.to_array();
    a.sort_unstable();
    a
}

proptest! {
    #[test]
    fn rotations_are_six_permutations(d in dim_strategy()) {
        let rotations: Vec<Dim3> = d.rotations().collect();
        prop_assert_eq!(rotations.len(), 6);
        prop_assert_eq!(rotations[0], d);
        for r in &rotations {
            prop_assert_eq!(sorted(r), sorted(&d));
            prop_assert_eq!(r.volume(), d.volume());
        }
    }

    #[test]
    fn rotations_are_distinct_for_distinct_components(
        (x, y, z) in (1i64..=300, 301i64..=600, 601i64..=900)
    ) {
        let d = Dim3::new(x, y, z);
        let rotations: Vec<Dim3> = d.rotations().collect();
        let identity_count = rotations.iter().filter(|r| **r == d).count();
        prop_assert_eq!(identity_count, 1);
        for (i, a) in rotations.iter().enumerate() {
            for b in rotations.iter().skip(i + 1) {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn height_axis_variants_cover_each_component(d in dim_strategy()) {
        let ys: Vec<i64> = d.height_axis_variants().map(|v| v.y).collect();
        prop_assert_eq!(ys, vec![d.x, d.y, d.z]);
    }

    #[test]
    fn self_difference_is_zero(d in dim_strategy()) {
        prop_assert_eq!(d.absolute_diff(&d), Dim3::ZERO);
        prop_assert!(d.contains(&d));
        prop_assert_eq!(d.min_abs_diff(d.y), 0);
    }

    #[test]
    fn absolute_diff_is_symmetric(a in dim_strategy(), b in dim_strategy()) {
        prop_assert_eq!(a.absolute_diff(&b), b.absolute_diff(&a));
    }
}
