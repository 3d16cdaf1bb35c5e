//! C-compatible bindings for the prism math types.
//!
//! This crate exposes a flat function surface that host engines written in C
//! (or anything speaking the C ABI) can call without knowing the internal
//! Rust types. Every parameter and return value is a `#[repr(C)]` struct
//! passed by value; there are no pointers, no allocation, and no state, so
//! every function here is safe and thread-safe.
//!
//! Exported symbol names keep the host's established flat naming scheme
//! (`vec3fCross`, `mat4fLookAt`, ...) while the Rust items stay snake_case.
//! Matrices are column-major throughout, matching OpenGL and `glam`.
#![deny(missing_docs)]

pub use prism_math::{Mat4f, Vec2f, Vec3f, Vec4f};

// ── Vec2f ───────────────────────────────────────────────────────────

/// Component-wise difference `a - b`.
#[unsafe(export_name = "vec2fSubtract")]
pub extern "C" fn vec2f_subtract(a: Vec2f, b: Vec2f) -> Vec2f {
    a.subtract(b)
}

/// Unit vector in the direction of `v`; NaN components for the zero vector.
#[unsafe(export_name = "vec2fNormalize")]
pub extern "C" fn vec2f_normalize(v: Vec2f) -> Vec2f {
    v.normalize()
}

/// Euclidean length of `v`.
#[unsafe(export_name = "vec2fLength")]
pub extern "C" fn vec2f_length(v: Vec2f) -> f32 {
    v.length()
}

/// Squared Euclidean length of `v`.
#[unsafe(export_name = "vec2fLengthSquared")]
pub extern "C" fn vec2f_length_squared(v: Vec2f) -> f32 {
    v.length_squared()
}

/// Euclidean distance between `a` and `b`.
#[unsafe(export_name = "vec2fDistance")]
pub extern "C" fn vec2f_distance(a: Vec2f, b: Vec2f) -> f32 {
    a.distance(b)
}

// ── Vec3f ───────────────────────────────────────────────────────────

/// Component-wise sum `a + b`.
#[unsafe(export_name = "vec3fAdd")]
pub extern "C" fn vec3f_add(a: Vec3f, b: Vec3f) -> Vec3f {
    a.add(b)
}

/// Component-wise difference `a - b`.
#[unsafe(export_name = "vec3fSubtract")]
pub extern "C" fn vec3f_subtract(a: Vec3f, b: Vec3f) -> Vec3f {
    a.subtract(b)
}

/// Every component of `v` scaled by `scalar`.
#[unsafe(export_name = "vec3fScale")]
pub extern "C" fn vec3f_scale(v: Vec3f, scalar: f32) -> Vec3f {
    v.scale(scalar)
}

/// Cross product `a × b` (right-hand rule).
#[unsafe(export_name = "vec3fCross")]
pub extern "C" fn vec3f_cross(a: Vec3f, b: Vec3f) -> Vec3f {
    a.cross(b)
}

/// Unit vector in the direction of `v`; NaN components for the zero vector.
#[unsafe(export_name = "vec3fNormalize")]
pub extern "C" fn vec3f_normalize(v: Vec3f) -> Vec3f {
    v.normalize()
}

/// Dot product `a · b`.
#[unsafe(export_name = "vec3fDot")]
pub extern "C" fn vec3f_dot(a: Vec3f, b: Vec3f) -> f32 {
    a.dot(b)
}

/// Euclidean length of `v`.
#[unsafe(export_name = "vec3fLength")]
pub extern "C" fn vec3f_length(v: Vec3f) -> f32 {
    v.length()
}

/// Squared Euclidean length of `v`.
#[unsafe(export_name = "vec3fLengthSquared")]
pub extern "C" fn vec3f_length_squared(v: Vec3f) -> f32 {
    v.length_squared()
}

/// Euclidean distance between `a` and `b`.
#[unsafe(export_name = "vec3fDistance")]
pub extern "C" fn vec3f_distance(a: Vec3f, b: Vec3f) -> f32 {
    a.distance(b)
}

/// Component-wise linear interpolation from `a` (t = 0) to `b` (t = 1).
#[unsafe(export_name = "vec3fLerp")]
pub extern "C" fn vec3f_lerp(a: Vec3f, b: Vec3f, t: f32) -> Vec3f {
    a.lerp(b, t)
}

/// Spherical interpolation from `a` to `b`: direction rotates at constant
/// angular velocity, magnitude interpolates linearly.
#[unsafe(export_name = "vec3fSlerp")]
pub extern "C" fn vec3f_slerp(a: Vec3f, b: Vec3f, t: f32) -> Vec3f {
    a.slerp(b, t)
}

// ── Vec4f ───────────────────────────────────────────────────────────

/// Component-wise sum `a + b`.
#[unsafe(export_name = "vec4fAdd")]
pub extern "C" fn vec4f_add(a: Vec4f, b: Vec4f) -> Vec4f {
    a.add(b)
}

/// Component-wise difference `a - b`.
#[unsafe(export_name = "vec4fSubtract")]
pub extern "C" fn vec4f_subtract(a: Vec4f, b: Vec4f) -> Vec4f {
    a.subtract(b)
}

/// Every component of `v` scaled by `scalar`.
#[unsafe(export_name = "vec4fScale")]
pub extern "C" fn vec4f_scale(v: Vec4f, scalar: f32) -> Vec4f {
    v.scale(scalar)
}

/// Unit vector in the direction of `v`; NaN components for the zero vector.
#[unsafe(export_name = "vec4fNormalize")]
pub extern "C" fn vec4f_normalize(v: Vec4f) -> Vec4f {
    v.normalize()
}

/// Dot product `a · b`.
#[unsafe(export_name = "vec4fDot")]
pub extern "C" fn vec4f_dot(a: Vec4f, b: Vec4f) -> f32 {
    a.dot(b)
}

/// Euclidean length of `v`.
#[unsafe(export_name = "vec4fLength")]
pub extern "C" fn vec4f_length(v: Vec4f) -> f32 {
    v.length()
}

/// Squared Euclidean length of `v`.
#[unsafe(export_name = "vec4fLengthSquared")]
pub extern "C" fn vec4f_length_squared(v: Vec4f) -> f32 {
    v.length_squared()
}

// ── Mat4f ───────────────────────────────────────────────────────────

/// The identity matrix.
#[unsafe(export_name = "mat4fIdentity")]
pub extern "C" fn mat4f_identity() -> Mat4f {
    Mat4f::identity()
}

/// Matrix product `a * b`.
#[unsafe(export_name = "mat4fMultiply")]
pub extern "C" fn mat4f_multiply(a: Mat4f, b: Mat4f) -> Mat4f {
    a.multiply(b)
}

/// General 4x4 inverse; singular input yields non-finite entries.
#[unsafe(export_name = "mat4fInverse")]
pub extern "C" fn mat4f_inverse(m: Mat4f) -> Mat4f {
    m.inverse()
}

/// Transpose of `m`.
#[unsafe(export_name = "mat4fTranspose")]
pub extern "C" fn mat4f_transpose(m: Mat4f) -> Mat4f {
    m.transpose()
}

/// Right-handed view matrix looking from `eye` toward `center`, with `up`
/// fixing the camera roll.
#[unsafe(export_name = "mat4fLookAt")]
pub extern "C" fn mat4f_look_at(eye: Vec3f, center: Vec3f, up: Vec3f) -> Mat4f {
    Mat4f::look_at(eye, center, up)
}

/// Right-handed perspective projection with OpenGL clip space. `fov` is the
/// full vertical field of view in radians.
#[unsafe(export_name = "mat4fPerspective")]
pub extern "C" fn mat4f_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4f {
    Mat4f::perspective(fov, aspect, near, far)
}

/// Right-handed orthographic projection with OpenGL clip space.
#[unsafe(export_name = "mat4fOrtho")]
pub extern "C" fn mat4f_ortho(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4f {
    Mat4f::ortho(left, right, bottom, top, near, far)
}

/// Transform `point` as a position, applying the perspective divide when the
/// resulting `w` is neither 1 nor 0.
#[unsafe(export_name = "mat4fTransformPoint")]
pub extern "C" fn mat4f_transform_point(m: Mat4f, point: Vec3f) -> Vec3f {
    m.transform_point(point)
}

/// Transform `dir` as a direction (w = 0); translation has no effect.
#[unsafe(export_name = "mat4fTransformDirection")]
pub extern "C" fn mat4f_transform_direction(m: Mat4f, dir: Vec3f) -> Vec3f {
    m.transform_direction(dir)
}

/// Full homogeneous product `m * v`.
#[unsafe(export_name = "mat4fTransformVec4")]
pub extern "C" fn mat4f_transform_vec4(m: Mat4f, v: Vec4f) -> Vec4f {
    m.transform_vec4(v)
}

/// Translation matrix moving points by `t`.
#[unsafe(export_name = "mat4fTranslation")]
pub extern "C" fn mat4f_translation(t: Vec3f) -> Mat4f {
    Mat4f::translation(t)
}

/// Non-uniform scaling matrix.
#[unsafe(export_name = "mat4fScaling")]
pub extern "C" fn mat4f_scaling(s: Vec3f) -> Mat4f {
    Mat4f::scaling(s)
}

/// Rotation of `angle` radians about the unit-length `axis`.
#[unsafe(export_name = "mat4fRotationAxis")]
pub extern "C" fn mat4f_rotation_axis(axis: Vec3f, angle: f32) -> Mat4f {
    Mat4f::rotation_axis(axis, angle)
}
