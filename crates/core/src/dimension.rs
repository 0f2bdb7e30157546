//! Integer 3D vector used both as a box size and as a location.
//!
//! Axis convention: `x` is the width of a layer (the skyline's horizontal
//! axis), `y` is the height along which layers are stacked, and `z` is the
//! depth that the skyline tracks as its level.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions or location in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dim3 {
    /// Width (or x coordinate).
    pub x: i64,
    /// Height (or y coordinate).
    pub y: i64,
    /// Depth (or z coordinate).
    pub z: i64,
}

/// Number of axis permutations of a box.
pub const ROTATION_COUNT: usize = 6;

impl Dim3 {
    /// Zero vector.
    pub const ZERO: Dim3 = Dim3 { x: 0, y: 0, z: 0 };

    /// Creates a new vector.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Product of the three components.
    ///
    /// Assumes the product fits in `i64`; see [`Dim3::checked_volume`].
    pub fn volume(&self) -> i64 {
        self.x * self.y * self.z
    }

    /// Product of the three components, or `None` on overflow.
    pub fn checked_volume(&self) -> Option<i64> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }

    /// Returns true if all three components are equal.
    pub fn is_cube(&self) -> bool {
        self.x == self.y && self.y == self.z
    }

    /// Returns true if every component of `other` is less than or equal to
    /// the matching component of `self`.
    pub fn contains(&self, other: &Dim3) -> bool {
        other.x <= self.x && other.y <= self.y && other.z <= self.z
    }

    /// Component-wise absolute difference.
    pub fn absolute_diff(&self, other: &Dim3) -> Dim3 {
        Dim3::new(
            (other.x - self.x).abs(),
            (other.y - self.y).abs(),
            (other.z - self.z).abs(),
        )
    }

    /// Smallest absolute difference between any component and `value`.
    pub fn min_abs_diff(&self, value: i64) -> i64 {
        (value - self.x)
            .abs()
            .min((value - self.y).abs())
            .min((value - self.z).abs())
    }

    /// `(y, x, z)`
    pub fn as_yxz(&self) -> Dim3 {
        Dim3::new(self.y, self.x, self.z)
    }

    /// `(z, x, y)`
    pub fn as_zxy(&self) -> Dim3 {
        Dim3::new(self.z, self.x, self.y)
    }

    /// `(x, z, y)`
    pub fn as_xzy(&self) -> Dim3 {
        Dim3::new(self.x, self.z, self.y)
    }

    /// `(y, z, x)`
    pub fn as_yzx(&self) -> Dim3 {
        Dim3::new(self.y, self.z, self.x)
    }

    /// `(z, y, x)`
    pub fn as_zyx(&self) -> Dim3 {
        Dim3::new(self.z, self.y, self.x)
    }

    /// Returns the rotation with the given index.
    ///
    /// Index order matches [`Dim3::rotations`]: identity, `zyx`, `zxy`,
    /// `yxz`, `xzy`, `yzx`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn as_variant(&self, index: usize) -> Dim3 {
        match index {
            0 => *self,
            1 => self.as_zyx(),
            2 => self.as_zxy(),
            3 => self.as_yxz(),
            4 => self.as_xzy(),
            5 => self.as_yzx(),
            _ => panic!("rotation index {index} out of range 0..{ROTATION_COUNT}"),
        }
    }

    /// All six axis permutations in a fixed order.
    ///
    /// The order is significant: box selection keeps the first of several
    /// equally good rotations.
    pub fn rotations(&self) -> impl Iterator<Item = Dim3> {
        [
            *self,
            self.as_zyx(),
            self.as_zxy(),
            self.as_yxz(),
            self.as_xzy(),
            self.as_yzx(),
        ]
        .into_iter()
    }

    /// Three permutations each placing a different component on the `y` axis.
    pub fn height_axis_variants(&self) -> impl Iterator<Item = Dim3> {
        [self.as_yxz(), *self, self.as_xzy()].into_iter()
    }

    /// Copy with a different `x`.
    pub fn with_x(&self, x: i64) -> Dim3 {
        Dim3 { x, ..*self }
    }

    /// Copy with a different `y`.
    pub fn with_y(&self, y: i64) -> Dim3 {
        Dim3 { y, ..*self }
    }

    /// Copy with a different `z`.
    pub fn with_z(&self, z: i64) -> Dim3 {
        Dim3 { z, ..*self }
    }

    /// Copy with different `y` and `z`.
    pub fn with_yz(&self, y: i64, z: i64) -> Dim3 {
        Dim3 { x: self.x, y, z }
    }

    /// Copy with `delta` subtracted from `y`.
    pub fn subtract_y(&self, delta: i64) -> Dim3 {
        self.with_y(self.y - delta)
    }

    /// Returns the components as an array.
    pub fn to_array(&self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i64; 3]> for Dim3 {
    fn from(v: [i64; 3]) -> Self {
        Dim3::new(v[0], v[1], v[2])
    }
}

impl From<(i64, i64, i64)> for Dim3 {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Dim3::new(x, y, z)
    }
}

impl fmt::Display for Dim3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.x, self.y, self.z)
    }
}
