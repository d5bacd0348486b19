/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// The batching code works in `f32` throughout: [`Vec2`] for 2D positions and
/// sizes, [`Vec3`] for vertex positions and [`Mat4`] for world and
/// view-projection transforms.
///
/// # Examples
///
/// ```
/// use lumen_core::math::{Mat4, Quat, Vec3};
///
/// let transform = Mat4::from_scale_rotation_translation(
///     Vec3::new(2.0, 2.0, 1.0),
///     Quat::from_rotation_z(0.0),
///     Vec3::new(10.0, 0.0, 0.0),
/// );
/// assert_eq!(transform.transform_point3(Vec3::ZERO), Vec3::new(10.0, 0.0, 0.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

/// Default tolerance for float comparisons of transformed geometry.
pub const EPSILON: f32 = 1e-5;

/// Transform for a quad: scale, then rotate about +Z, then translate.
///
/// Matches the column-vector convention used everywhere in the renderer, so
/// the returned matrix is `T * R * S`.
#[inline]
pub fn scale_rotate_translate(scale: Vec2, angle: f32, translation: Vec2) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        scale.extend(1.0),
        Quat::from_rotation_z(angle),
        translation.extend(0.0),
    )
}
