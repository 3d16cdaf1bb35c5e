//! 2D vector type.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D point or vector with C-compatible layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - rhs`.
    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::from(Vec2::from(self) - Vec2::from(rhs))
    }

    /// The unit vector pointing in the same direction.
    ///
    /// The zero vector normalizes to NaN components.
    #[must_use]
    pub fn normalize(self) -> Self {
        Self::from(Vec2::from(self).normalize())
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        Vec2::from(self).length()
    }

    /// Squared Euclidean length. Avoids the square root when only ordering
    /// matters.
    #[must_use]
    pub fn length_squared(self) -> f32 {
        Vec2::from(self).length_squared()
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, rhs: Self) -> f32 {
        self.subtract(rhs).length()
    }
}

impl From<Vec2> for Vec2f {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2f> for Vec2 {
    fn from(v: Vec2f) -> Self {
        Self::new(v.x, v.y)
    }
}
