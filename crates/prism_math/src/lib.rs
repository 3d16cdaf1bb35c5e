//! # prism_math
//!
//! Math value types for the prism host engine. Re-exports [`glam`] for linear
//! algebra and defines the C-layout types ([`Vec2f`], [`Vec3f`], [`Vec4f`],
//! [`Mat4f`]) that cross the host boundary.
//!
//! Every type is `#[repr(C)]`, `Copy`, and [`bytemuck::Pod`], so values can be
//! handed to C callers or GPU buffers byte for byte. Operations are pure
//! functions over these values; degenerate input (zero-length normalize,
//! zero-depth projection) propagates IEEE-754 NaN/Inf rather than signalling
//! an error, as real-time graphics math conventionally does.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

// Re-export glam for hosts that want the full linear-algebra surface.
pub use glam;

pub use mat4::Mat4f;
pub use vec2::Vec2f;
pub use vec3::Vec3f;
pub use vec4::Vec4f;
