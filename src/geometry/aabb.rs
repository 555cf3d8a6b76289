//! Axis-aligned bounding boxes and the per-axis overlap queries used by the
//! collision world.

use glam::Vec3;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World X.
    X,
    /// World Y.
    Y,
    /// World Z.
    Z,
}

impl Axis {
    /// All axes in evaluation order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a `Vec3`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Axis-aligned box with `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Lower corner.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two corners, sorting each axis so `min <= max`.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Cube centered on `position` with edge length `size`.
    #[must_use]
    pub fn from_center_size(position: Vec3, size: f32) -> Self {
        let half = Vec3::splat(size.abs() * 0.5);
        Self {
            min: position - half,
            max: position + half,
        }
    }

    /// Closed interval test on a single axis.
    #[inline]
    #[must_use]
    pub fn overlaps_on(&self, other: &Self, axis: Axis) -> bool {
        let i = axis.index();
        self.min[i] <= other.max[i] && self.max[i] >= other.min[i]
    }

    /// True when the boxes overlap on all three axes. Touching faces count.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        Axis::ALL.iter().all(|&axis| self.overlaps_on(other, axis))
    }

    /// Per-axis penetration depth, `min(a.max - b.min, b.max - a.min)`.
    ///
    /// Only meaningful when the boxes intersect.
    #[must_use]
    pub fn penetration_depths(&self, other: &Self) -> Vec3 {
        (self.max - other.min).min(other.max - self.min)
    }

    /// Axis of least penetration, or `None` when the boxes don't touch.
    ///
    /// Ties are not broken toward the earlier axis: X wins only when it is
    /// strictly smaller than both Y and Z, Y likewise against X and Z, and
    /// every other case, exact ties included, resolves to Z.
    #[must_use]
    pub fn min_penetration_axis(&self, other: &Self) -> Option<Axis> {
        if !self.intersects(other) {
            return None;
        }
        let d = self.penetration_depths(other);
        if d.x < d.y && d.x < d.z {
            Some(Axis::X)
        } else if d.y < d.x && d.y < d.z {
            Some(Axis::Y)
        } else {
            Some(Axis::Z)
        }
    }

    /// Whether `other` pokes out of this box on `axis`.
    #[inline]
    #[must_use]
    pub fn exceeded_on(&self, other: &Self, axis: Axis) -> bool {
        let i = axis.index();
        other.min[i] < self.min[i] || other.max[i] > self.max[i]
    }

    /// Test if a point lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
