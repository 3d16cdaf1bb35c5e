//! Homogeneous 4D vector type.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// A homogeneous vector with C-compatible layout.
///
/// `w = 1` marks a point, `w = 0` a direction, under the usual homogeneous
/// convention; nothing here enforces that.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec4f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4f {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Component-wise sum `self + rhs`.
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self::from(Vec4::from(self) + Vec4::from(rhs))
    }

    /// Component-wise difference `self - rhs`.
    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::from(Vec4::from(self) - Vec4::from(rhs))
    }

    /// Scale every component by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f32) -> Self {
        Self::from(Vec4::from(self) * scalar)
    }

    /// The unit vector pointing in the same direction.
    ///
    /// The zero vector normalizes to NaN components.
    #[must_use]
    pub fn normalize(self) -> Self {
        Self::from(Vec4::from(self).normalize())
    }

    /// Dot product `self · rhs`.
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        Vec4::from(self).dot(Vec4::from(rhs))
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        Vec4::from(self).length()
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_squared(self) -> f32 {
        Vec4::from(self).length_squared()
    }
}

impl From<Vec4> for Vec4f {
    fn from(v: Vec4) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }
}

impl From<Vec4f> for Vec4 {
    fn from(v: Vec4f) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_subtract_scale() {
        let a = Vec4f::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4f::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a.add(b), Vec4f::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a.subtract(b), Vec4f::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a.scale(2.0), Vec4f::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_dot_and_length() {
        let v = Vec4f::new(1.0, 2.0, 2.0, 4.0);
        assert_relative_eq!(v.length_squared(), 25.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.dot(v), v.length_squared());
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = Vec4f::new(1.0, 2.0, 2.0, 4.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec4f::ZERO.normalize();
        assert!(n.x.is_nan() && n.w.is_nan());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let v = Vec4f::new(1.0, -2.0, 3.0, 0.5);
        let bytes = rmp_serde::to_vec(&v).unwrap();
        let restored: Vec4f = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(v, restored);
    }
}
