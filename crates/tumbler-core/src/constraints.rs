//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// The width axis as an independent constraint.
    #[must_use]
    pub const fn width_axis(&self) -> AxisConstraint {
        AxisConstraint {
            min: self.min_width,
            max: self.max_width,
        }
    }

    /// The height axis as an independent constraint.
    #[must_use]
    pub const fn height_axis(&self) -> AxisConstraint {
        AxisConstraint {
            min: self.min_height,
            max: self.max_height,
        }
    }

    /// Resolve both axes against an intrinsic size. Axes are independent.
    #[must_use]
    pub fn resolve(&self, intrinsic: Size) -> Size {
        Size::new(
            self.width_axis().resolve(intrinsic.width),
            self.height_axis().resolve(intrinsic.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// One axis of a [`Constraints`] box.
///
/// Hosts express one of three measurement modes per axis: an exact mandate
/// (min == max), a cap (finite max, loose min), or no opinion (unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConstraint {
    /// Minimum extent
    pub min: f32,
    /// Maximum extent
    pub max: f32,
}

impl AxisConstraint {
    /// Whether the host mandates an exact extent on this axis.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    /// Whether the host caps this axis without mandating a value.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max.is_finite()
    }

    /// Resolve this axis against an intrinsic extent.
    ///
    /// Exact mandate wins outright; a cap yields the smaller of the
    /// intrinsic extent and the cap; otherwise the intrinsic extent stands.
    #[must_use]
    pub fn resolve(&self, intrinsic: f32) -> f32 {
        if self.is_exact() {
            self.max
        } else if self.is_bounded() {
            intrinsic.min(self.max)
        } else {
            intrinsic
        }
    }
}
