//! The capability interface batches consume from a graphics backend.

use crate::shader::{DefaultShaders, ShaderHandle, UniformValue};
use crate::texture::Texture;
use crate::vertex::{PrimitiveKind, Vertex};

/// Vertex capacity assumed when a backend does not report its own.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 16384;

/// Operations a graphics backend provides to the batching layer.
///
/// Batches only call into the backend while flushing, so the flush policy
/// alone determines how many submissions a frame costs. Every call is
/// synchronous and assumed to succeed; surfacing device loss is the
/// backend's own business.
///
/// # Borrow Checking Pattern
///
/// Methods take `&self` so one backend can be shared by many batches through
/// an `Arc`. Implementations that record state (GPU object caches, call
/// logs) use interior mutability.
///
/// # Example
///
/// ```rust,no_run
/// use lumen_render::{PrimitiveKind, RenderBackend, Vertex};
///
/// fn draw_one_triangle(backend: &dyn RenderBackend, vertices: &[Vertex; 3]) {
///     backend.submit_primitives(PrimitiveKind::TriangleList, vertices);
/// }
/// ```
pub trait RenderBackend: Send + Sync {
    /// Issue one draw call for `vertices`, preserving their order.
    fn submit_primitives(&self, kind: PrimitiveKind, vertices: &[Vertex]);

    /// Make `texture` active for subsequent submissions.
    ///
    /// A texture that has never been uploaded is uploaded as a side effect.
    fn bind_texture(&self, texture: &Texture);

    /// Re-upload the full pixel contents of `texture`.
    fn upload_texture_data(&self, texture: &Texture);

    /// Activate a shader program.
    fn use_shader(&self, shader: ShaderHandle);

    /// Set a named uniform on the active shader program.
    fn set_uniform(&self, name: &str, value: UniformValue);

    /// Shaders used when a batch has no override.
    fn default_shaders(&self) -> DefaultShaders;

    /// Largest vertex count a single submission may carry.
    fn max_buffer_size(&self) -> usize {
        DEFAULT_MAX_BUFFER_SIZE
    }
}
