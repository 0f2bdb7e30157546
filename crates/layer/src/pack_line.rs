//! Packing line: the skyline of one layer.
//!
//! The line describes the `x`/`z` profile of the boxes already packed in a
//! layer, where `x` runs across the pallet width and `z` is how far the boxes
//! reach into the pallet depth. It is a doubly linked list of segments stored
//! in an arena and addressed by [`SegmentId`].
//!
//! Invariants kept by every mutating operation:
//!
//! - segments are contiguous, with strictly increasing right edges
//! - the last right edge equals the line width
//! - no two adjacent segments share the same `z`

use palletpack_core::Dim3;

/// Handle to a segment of a [`PackLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(usize);

/// One horizontal segment of the line.
#[derive(Debug, Clone)]
pub struct Segment {
    left: Option<SegmentId>,
    right: Option<SegmentId>,
    right_x: i64,
    z: i64,
}

impl Segment {
    /// Right `x` coordinate.
    pub fn right_x(&self) -> i64 {
        self.right_x
    }

    /// Level of the segment.
    pub fn z(&self) -> i64 {
        self.z
    }

    /// Left neighbor.
    pub fn left(&self) -> Option<SegmentId> {
        self.left
    }

    /// Right neighbor.
    pub fn right(&self) -> Option<SegmentId> {
        self.right
    }
}

/// Skyline of a layer.
#[derive(Debug, Clone)]
pub struct PackLine {
    segments: Vec<Segment>,
    free: Vec<SegmentId>,
    first: SegmentId,
}

impl PackLine {
    /// Creates a line of the given width with a single segment at level 0.
    pub fn new(width: i64) -> Self {
        Self {
            segments: vec![Segment {
                left: None,
                right: None,
                right_x: width,
                z: 0,
            }],
            free: Vec::new(),
            first: SegmentId(0),
        }
    }

    /// Builds a line from `(z, right_x)` pairs, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `profile` is empty.
    pub fn from_profile(profile: &[(i64, i64)]) -> Self {
        assert!(!profile.is_empty(), "a pack line needs at least one segment");
        let count = profile.len();
        let segments = profile
            .iter()
            .enumerate()
            .map(|(i, &(z, right_x))| Segment {
                left: i.checked_sub(1).map(SegmentId),
                right: (i + 1 < count).then_some(SegmentId(i + 1)),
                right_x,
                z,
            })
            .collect();
        Self {
            segments,
            free: Vec::new(),
            first: SegmentId(0),
        }
    }

    /// The leftmost segment.
    pub fn first(&self) -> SegmentId {
        self.first
    }

    /// Returns the segment behind a handle.
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    fn segment_mut(&mut self, id: SegmentId) -> &mut Segment {
        &mut self.segments[id.0]
    }

    /// Level of a segment.
    pub fn z(&self, id: SegmentId) -> i64 {
        self.segment(id).z
    }

    /// Right edge of a segment.
    pub fn right_x(&self, id: SegmentId) -> i64 {
        self.segment(id).right_x
    }

    /// Left edge of a segment: 0 for the leftmost one, otherwise the left
    /// neighbor's right edge.
    pub fn left_x(&self, id: SegmentId) -> i64 {
        self.segment(id).left.map_or(0, |left| self.right_x(left))
    }

    /// Width of a segment.
    pub fn width(&self, id: SegmentId) -> i64 {
        self.right_x(id) - self.left_x(id)
    }

    /// Left neighbor of a segment.
    pub fn left_of(&self, id: SegmentId) -> Option<SegmentId> {
        self.segment(id).left
    }

    /// Right neighbor of a segment.
    pub fn right_of(&self, id: SegmentId) -> Option<SegmentId> {
        self.segment(id).right
    }

    /// Returns true if the segment is the only one on the line.
    pub fn is_alone(&self, id: SegmentId) -> bool {
        let s = self.segment(id);
        s.left.is_none() && s.right.is_none()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A line always holds at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over segment handles from left to right.
    pub fn iter(&self) -> impl Iterator<Item = SegmentId> + '_ {
        std::iter::successors(Some(self.first), move |&id| self.right_of(id))
    }

    /// Returns the `(z, right_x)` profile from left to right.
    pub fn profile(&self) -> Vec<(i64, i64)> {
        self.iter().map(|id| (self.z(id), self.right_x(id))).collect()
    }

    /// Finds the segment with the lowest level. The leftmost one wins ties.
    pub fn find_valley(&self) -> SegmentId {
        let mut valley = self.first;
        for id in self.iter().skip(1) {
            if self.z(id) < self.z(valley) {
                valley = id;
            }
        }
        valley
    }

    /// Places a box on the valley segment.
    ///
    /// Uses the box's `x` as the width it covers and its `z` as the amount
    /// it raises the line. A box narrower than the valley goes to its left
    /// side.
    pub fn apply_box(&mut self, valley: SegmentId, size: Dim3) {
        debug_assert!(
            size.x <= self.width(valley),
            "box wider than the valley it is placed on"
        );
        if size.x == self.width(valley) {
            self.raise(valley, size.z);
        } else if self.left_of(valley).is_none() {
            self.insert_left(valley, size);
        } else {
            self.place_on_left_of(valley, size);
        }
    }

    /// Raises a segment by `dz`.
    ///
    /// Absorbs every right neighbor that ends up on the same level, then
    /// merges into the left neighbor if that one is on the same level. The
    /// left merge is a single step.
    pub fn raise(&mut self, id: SegmentId, dz: i64) {
        self.segment_mut(id).z += dz;
        let z = self.z(id);
        while let Some(right) = self.right_of(id) {
            if self.z(right) != z {
                break;
            }
            self.remove_right(id);
        }
        if let Some(left) = self.left_of(id) {
            if self.z(left) == z {
                self.remove_self(id);
            }
        }
    }

    /// Inserts a new segment on the left of `id`, covering `size.x` of its
    /// width and `size.z` above its level. Returns the new segment.
    ///
    /// Assumes the box is narrower than the segment.
    pub fn insert_left(&mut self, id: SegmentId, size: Dim3) -> SegmentId {
        let left = self.left_of(id);
        let right_x = self.left_x(id) + size.x;
        let z = self.z(id) + size.z;
        let new_id = self.alloc(Segment {
            left,
            right: Some(id),
            right_x,
            z,
        });
        match left {
            Some(left) => self.segment_mut(left).right = Some(new_id),
            None => self.first = new_id,
        }
        self.segment_mut(id).left = Some(new_id);
        new_id
    }

    /// Covers the left part of a segment with a box, widening the left
    /// neighbor instead of inserting when it already sits on the new level.
    ///
    /// Assumes the box is narrower than the segment.
    pub fn place_on_left_of(&mut self, id: SegmentId, size: Dim3) {
        let new_z = self.z(id) + size.z;
        match self.left_of(id) {
            Some(left) if self.z(left) == new_z => {
                self.segment_mut(left).right_x += size.x;
            }
            _ => {
                self.insert_left(id, size);
            }
        }
    }

    /// Raises a segment to the lower of its neighbors' levels, or to its only
    /// neighbor's level. Does nothing for a lone segment.
    pub fn fill_valley(&mut self, id: SegmentId) {
        let target = match (self.left_of(id), self.right_of(id)) {
            (None, None) => return,
            (None, Some(right)) => self.z(right),
            (Some(left), None) => self.z(left),
            (Some(left), Some(right)) => self.z(left).min(self.z(right)),
        };
        self.raise(id, target - self.z(id));
    }

    fn alloc(&mut self, segment: Segment) -> SegmentId {
        match self.free.pop() {
            Some(id) => {
                self.segments[id.0] = segment;
                id
            }
            None => {
                self.segments.push(segment);
                SegmentId(self.segments.len() - 1)
            }
        }
    }

    /// Extends `id` over its right neighbor, keeping the level of `id`.
    fn remove_right(&mut self, id: SegmentId) {
        let Some(right) = self.right_of(id) else {
            return;
        };
        let (right_x, next) = {
            let r = self.segment(right);
            (r.right_x, r.right)
        };
        let s = self.segment_mut(id);
        s.right_x = right_x;
        s.right = next;
        if let Some(next) = next {
            self.segment_mut(next).left = Some(id);
        }
        self.free.push(right);
    }

    /// Unlinks `id`, letting its left neighbor take over its span.
    fn remove_self(&mut self, id: SegmentId) {
        let (left, right, right_x) = {
            let s = self.segment(id);
            (s.left, s.right, s.right_x)
        };
        let Some(left) = left else {
            return;
        };
        let l = self.segment_mut(left);
        l.right_x = right_x;
        l.right = right;
        if let Some(right) = right {
            self.segment_mut(right).left = Some(left);
        }
        self.free.push(id);
    }
}
