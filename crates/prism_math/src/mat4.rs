//! 4x4 matrix type.
//!
//! [`Mat4f`] stores its entries in a column-major flat array, the same
//! convention as `glam::Mat4` and OpenGL: consecutive entries walk down a
//! column before moving to the next one, so the translation of an affine
//! transform lives at indices 12..15.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

use crate::{Vec3f, Vec4f};

/// A 4x4 matrix in column-major flat layout with C-compatible layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat4f {
    /// Entries in column-major order: `data[col * 4 + row]`.
    pub data: [f32; 16],
}

impl Mat4f {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// The identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Matrix product `self * rhs`.
    #[must_use]
    pub fn multiply(self, rhs: Self) -> Self {
        Self::from(Mat4::from(self) * Mat4::from(rhs))
    }

    /// General 4x4 inverse.
    ///
    /// A singular matrix inverts to non-finite entries; no error is signalled.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::from(Mat4::from(self).inverse())
    }

    /// Transpose.
    #[must_use]
    pub fn transpose(self) -> Self {
        Self::from(Mat4::from(self).transpose())
    }

    /// Right-handed view matrix looking from `eye` toward `center`.
    ///
    /// `up` orients the camera roll; it need not be orthogonal to the view
    /// direction, only non-parallel to it.
    #[must_use]
    pub fn look_at(eye: Vec3f, center: Vec3f, up: Vec3f) -> Self {
        Self::from(Mat4::look_at_rh(eye.into(), center.into(), up.into()))
    }

    /// Right-handed perspective projection with OpenGL clip space
    /// (z in [-1, 1]).
    ///
    /// `fov` is the full vertical field of view in radians.
    #[must_use]
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::from(Mat4::perspective_rh_gl(fov, aspect, near, far))
    }

    /// Right-handed orthographic projection with OpenGL clip space
    /// (z in [-1, 1]).
    #[must_use]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self::from(Mat4::orthographic_rh_gl(left, right, bottom, top, near, far))
    }

    /// Translation matrix moving points by `t`.
    #[must_use]
    pub fn translation(t: Vec3f) -> Self {
        Self::from(Mat4::from_translation(t.into()))
    }

    /// Non-uniform scaling matrix.
    #[must_use]
    pub fn scaling(s: Vec3f) -> Self {
        Self::from(Mat4::from_scale(s.into()))
    }

    /// Rotation of `angle` radians about `axis`. `axis` must be unit length.
    #[must_use]
    pub fn rotation_axis(axis: Vec3f, angle: f32) -> Self {
        Self::from(Mat4::from_axis_angle(axis.into(), angle))
    }

    /// Transform `point` as a position: extend to `(point, 1)`, multiply,
    /// and divide by the resulting `w` when it is neither 1 nor 0.
    ///
    /// The conditional divide lets one routine serve both affine transforms
    /// (w stays 1, no divide) and projective ones (perspective divide).
    #[must_use]
    pub fn transform_point(self, point: Vec3f) -> Vec3f {
        let v = Mat4::from(self) * Vec4::new(point.x, point.y, point.z, 1.0);
        let v = if v.w != 1.0 && v.w != 0.0 { v / v.w } else { v };
        Vec3f::new(v.x, v.y, v.z)
    }

    /// Transform `dir` as a direction: extend to `(dir, 0)`, multiply, and
    /// drop `w`. Translation has no effect on directions.
    #[must_use]
    pub fn transform_direction(self, dir: Vec3f) -> Vec3f {
        let v = Mat4::from(self) * Vec4::new(dir.x, dir.y, dir.z, 0.0);
        Vec3f::new(v.x, v.y, v.z)
    }

    /// Full homogeneous product `self * v`.
    #[must_use]
    pub fn transform_vec4(self, v: Vec4f) -> Vec4f {
        Vec4f::from(Mat4::from(self) * Vec4::from(v))
    }

}

impl Default for Mat4f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for Mat4f {
    fn from(m: Mat4) -> Self {
        Self {
            data: m.to_cols_array(),
        }
    }
}

impl From<Mat4f> for Mat4 {
    fn from(m: Mat4f) -> Self {
        Self::from_cols_array(&m.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat4_eq(a: Mat4f, b: Mat4f, epsilon: f32) {
        for i in 0..16 {
            assert_relative_eq!(a.data[i], b.data[i], epsilon = epsilon);
        }
    }

    #[test]
    fn test_identity_multiply_is_noop() {
        let m = Mat4f::translation(Vec3f::new(1.0, 2.0, 3.0))
            .multiply(Mat4f::scaling(Vec3f::new(2.0, 2.0, 2.0)));
        assert_eq!(Mat4f::identity().multiply(m), m);
        assert_eq!(m.multiply(Mat4f::identity()), m);
    }

    #[test]
    fn test_multiply_composes_right_to_left() {
        // Scale first, then translate.
        let m = Mat4f::translation(Vec3f::new(10.0, 0.0, 0.0))
            .multiply(Mat4f::scaling(Vec3f::new(2.0, 2.0, 2.0)));
        let p = m.transform_point(Vec3f::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3f::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = Mat4f::translation(Vec3f::new(1.0, -2.0, 3.0))
            .multiply(Mat4f::rotation_axis(Vec3f::new(0.0, 1.0, 0.0), 0.7))
            .multiply(Mat4f::scaling(Vec3f::new(2.0, 3.0, 4.0)));
        assert_mat4_eq(m.multiply(m.inverse()), Mat4f::IDENTITY, 1e-5);
    }

    #[test]
    fn test_transpose_involution() {
        let m = Mat4f::perspective(1.0, 1.5, 0.1, 100.0);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_column_major_layout() {
        let m = Mat4f::translation(Vec3f::new(4.0, 5.0, 6.0));
        assert_eq!(m.data[12], 4.0);
        assert_eq!(m.data[13], 5.0);
        assert_eq!(m.data[14], 6.0);
        assert_eq!(m.data[15], 1.0);
    }

    #[test]
    fn test_look_at_origin_down_negative_z() {
        // Camera at origin looking down -z is the identity view.
        let m = Mat4f::look_at(
            Vec3f::ZERO,
            Vec3f::new(0.0, 0.0, -1.0),
            Vec3f::new(0.0, 1.0, 0.0),
        );
        assert_mat4_eq(m, Mat4f::IDENTITY, 1e-6);
    }

    #[test]
    fn test_look_at_translates_eye_to_origin() {
        let eye = Vec3f::new(3.0, 4.0, 5.0);
        let m = Mat4f::look_at(eye, Vec3f::ZERO, Vec3f::new(0.0, 1.0, 0.0));
        let p = m.transform_point(eye);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_entries() {
        let fov = std::f32::consts::FRAC_PI_2;
        let (aspect, near, far) = (2.0, 0.1, 100.0);
        let m = Mat4f::perspective(fov, aspect, near, far);
        let tan_half = (fov / 2.0).tan();
        assert_relative_eq!(m.data[0], 1.0 / (aspect * tan_half), epsilon = 1e-6);
        assert_relative_eq!(m.data[5], 1.0 / tan_half, epsilon = 1e-6);
        assert_relative_eq!(m.data[10], -(far + near) / (far - near), epsilon = 1e-6);
        assert_relative_eq!(m.data[11], -1.0, epsilon = 1e-6);
        assert_relative_eq!(
            m.data[14],
            -(2.0 * far * near) / (far - near),
            epsilon = 1e-6
        );
        assert_relative_eq!(m.data[15], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ortho_maps_box_to_clip_cube() {
        let m = Mat4f::ortho(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
        // Near-bottom-left corner maps to (-1, -1, -1).
        let p = m.transform_point(Vec3f::new(-2.0, -1.0, -0.1));
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-5);
        // Far-top-right corner maps to (1, 1, 1).
        let q = m.transform_point(Vec3f::new(2.0, 1.0, -10.0));
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(q.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(q.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_point_applies_perspective_divide() {
        let m = Mat4f::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        // A point on the far plane straight ahead lands at z = 1 after the
        // divide.
        let p = m.transform_point(Vec3f::new(0.0, 0.0, -100.0));
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_transform_point_affine_no_divide() {
        let m = Mat4f::translation(Vec3f::new(1.0, 2.0, 3.0));
        let p = m.transform_point(Vec3f::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3f::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_transform_point_w_zero_skips_divide() {
        // A point on the camera plane (z = 0) projects to w = 0; the raw
        // product comes back undivided instead of 0/0 NaNs.
        let (near, far) = (1.0, 100.0);
        let m = Mat4f::perspective(std::f32::consts::FRAC_PI_2, 1.0, near, far);
        let p = m.transform_point(Vec3f::new(0.0, 0.0, 0.0));
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, -(2.0 * far * near) / (far - near), epsilon = 1e-5);
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let m = Mat4f::translation(Vec3f::new(100.0, 100.0, 100.0));
        let d = m.transform_direction(Vec3f::new(0.0, 0.0, -1.0));
        assert_eq!(d, Vec3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_transform_vec4() {
        let m = Mat4f::translation(Vec3f::new(1.0, 2.0, 3.0));
        // Points (w = 1) translate, directions (w = 0) do not.
        let p = m.transform_vec4(Vec4f::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(p, Vec4f::new(1.0, 2.0, 3.0, 1.0));
        let d = m.transform_vec4(Vec4f::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(d, Vec4f::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_axis_quarter_turn() {
        let m = Mat4f::rotation_axis(Vec3f::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
        let p = m.transform_point(Vec3f::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_glam_roundtrip() {
        let m = Mat4f::perspective(1.2, 1.7, 0.5, 50.0);
        assert_eq!(Mat4f::from(Mat4::from(m)), m);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = Mat4f::look_at(
            Vec3f::new(1.0, 2.0, 3.0),
            Vec3f::ZERO,
            Vec3f::new(0.0, 1.0, 0.0),
        );
        let bytes = rmp_serde::to_vec(&m).unwrap();
        let restored: Mat4f = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(m, restored);
    }
}
