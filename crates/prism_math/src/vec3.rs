//! 3D vector type.
//!
//! [`Vec3f`] is the workhorse of the host boundary: positions, directions,
//! and the basis vectors fed to [`Mat4f::look_at`](crate::Mat4f::look_at)
//! all cross as this type.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3D point or vector with C-compatible layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum `self + rhs`.
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self::from(Vec3::from(self) + Vec3::from(rhs))
    }

    /// Component-wise difference `self - rhs`.
    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::from(Vec3::from(self) - Vec3::from(rhs))
    }

    /// Scale every component by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f32) -> Self {
        Self::from(Vec3::from(self) * scalar)
    }

    /// Cross product `self × rhs` (right-hand rule).
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from(Vec3::from(self).cross(Vec3::from(rhs)))
    }

    /// The unit vector pointing in the same direction.
    ///
    /// The zero vector normalizes to NaN components.
    #[must_use]
    pub fn normalize(self) -> Self {
        Self::from(Vec3::from(self).normalize())
    }

    /// Dot product `self · rhs`.
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        Vec3::from(self).dot(Vec3::from(rhs))
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        Vec3::from(self).length()
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_squared(self) -> f32 {
        Vec3::from(self).length_squared()
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, rhs: Self) -> f32 {
        self.subtract(rhs).length()
    }

    /// Component-wise linear interpolation from `self` at `t = 0` to `rhs`
    /// at `t = 1`. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        Self::from(Vec3::from(self).lerp(Vec3::from(rhs), t))
    }

    /// Spherical linear interpolation from `self` to `rhs`.
    ///
    /// Directions rotate at constant angular velocity while magnitudes
    /// interpolate linearly, so the inputs need not be unit length. Nearly
    /// parallel inputs (normalized dot above 0.9995) fall back to [`lerp`]
    /// to avoid the unstable `acos` near ±1.
    ///
    /// [`lerp`]: Self::lerp
    #[must_use]
    pub fn slerp(self, rhs: Self, t: f32) -> Self {
        let va = Vec3::from(self);
        let vb = Vec3::from(rhs);

        let mag_a = va.length();
        let mag_b = vb.length();
        let a_hat = va.normalize();
        let b_hat = vb.normalize();

        let dot = a_hat.dot(b_hat).clamp(-1.0, 1.0);
        if dot > 0.9995 {
            return Self::from(va + t * (vb - va));
        }

        let theta = dot.acos() * t;
        // Orthogonal direction in the plane spanned by the inputs.
        let relative = (b_hat - a_hat * dot).normalize();
        let direction = a_hat * theta.cos() + relative * theta.sin();

        let mag = mag_a + t * (mag_b - mag_a);
        Self::from(direction.normalize() * mag)
    }
}

impl From<Vec3> for Vec3f {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3f> for Vec3 {
    fn from(v: Vec3f) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
