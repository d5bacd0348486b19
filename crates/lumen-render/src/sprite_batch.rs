//! Batched textured quads.
//!
//! A [`SpriteBatch`] buffers quads between [`begin`](SpriteBatch::begin) and
//! [`end`](SpriteBatch::end) and hands them to the backend in as few
//! submissions as possible. The buffer is allocated once; when it fills up
//! mid-session the pending quads are flushed and drawing continues, so
//! callers never have to reason about capacity.
//!
//! # Example
//!
//! ```ignore
//! let mut batch = SpriteBatch::new(context.clone())?;
//!
//! batch.begin(Mat4::IDENTITY, Some(texture.clone()), None);
//! batch.draw(&TextureCoordinates::default(), Vec2::new(10.0, 20.0), Vec2::splat(32.0), 0.0);
//! batch.end();
//! ```

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};
use lumen_core::geometry::Rect;
use lumen_core::math::scale_rotate_translate;
use lumen_core::profiling::{profile_function, profile_scope};

use crate::Color;
use crate::context::GraphicsContext;
use crate::error::BatchError;
use crate::shader::{ShaderHandle, UniformValue, WORLD_UNIFORM};
use crate::stats::BatchStats;
use crate::tex_coords::TextureCoordinates;
use crate::texture::Texture;
use crate::vertex::{PrimitiveKind, Vertex};

/// Two triangles per quad.
pub const VERTICES_PER_SPRITE: usize = 6;

const BATCH_NAME: &str = "SpriteBatch";

/// Unit quad centred on the origin, Y up, as two counter-clockwise triangles.
const QUAD_VERTICES: [Vec3; VERTICES_PER_SPRITE] = [
    // Triangle 1
    Vec3::new(-0.5, 0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    // Triangle 2
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
];

/// One sub-image draw for [`SpriteBatch::draw_region`].
///
/// `source` is in image pixels with a top-left origin. Swapping its edges
/// (negative width or height) mirrors the sampled image; `None` samples the
/// whole image.
#[derive(Debug, Clone)]
pub struct SpriteRegion {
    pub image: Arc<Texture>,
    pub position: Vec2,
    pub source: Option<Rect<f32>>,
    pub color: Color,
    pub scale: Vec2,
    pub rotation: f32,
    pub origin: Vec2,
}

impl SpriteRegion {
    pub fn new(image: Arc<Texture>, position: Vec2) -> Self {
        Self {
            image,
            position,
            source: None,
            color: Color::WHITE,
            scale: Vec2::ONE,
            rotation: 0.0,
            origin: Vec2::ZERO,
        }
    }

    pub fn source(mut self, source: Rect<f32>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// The sampled region, defaulting to the full image.
    pub fn source_or_full(&self) -> Rect<f32> {
        self.source.unwrap_or_else(|| {
            Rect::new(0.0, 0.0, self.image.width() as f32, self.image.height() as f32)
        })
    }

    /// Placement transform of the unit quad.
    ///
    /// The quad is sized to the source region times `scale`, anchored so that
    /// `origin` (in source pixels, measured from the top-left) lands on
    /// `position`, and rotated about its own center.
    pub fn transform(&self) -> Mat4 {
        let source = self.source_or_full();
        let extent = Vec2::new(source.width.abs(), source.height.abs());
        let translation = Vec2::new(
            self.position.x - self.origin.x * self.scale.x + extent.x / 2.0 * self.scale.x,
            self.position.y + self.origin.y * self.scale.y - extent.y / 2.0 * self.scale.y,
        );
        scale_rotate_translate(self.scale * extent, self.rotation, translation)
    }

    /// Source edges normalized by the image size.
    pub fn texture_coordinates(&self) -> TextureCoordinates {
        let source = self.source_or_full();
        let iw = self.image.width() as f32;
        let ih = self.image.height() as f32;
        let (l, r) = (source.left() / iw, source.right() / iw);
        let (t, b) = (source.top() / ih, source.bottom() / ih);
        TextureCoordinates::new(
            Vec2::new(l, t),
            Vec2::new(r, t),
            Vec2::new(l, b),
            Vec2::new(r, b),
        )
    }
}

/// Accumulates textured quads and submits them as triangle lists.
pub struct SpriteBatch {
    context: Arc<GraphicsContext>,
    vertices: Vec<Vertex>,
    /// Quads the buffer holds
    capacity: usize,
    /// Quads written since the last flush
    pending: usize,
    transform: Mat4,
    texture: Option<Arc<Texture>>,
    shader_override: Option<ShaderHandle>,
    begun: bool,
    stats: BatchStats,
}

impl SpriteBatch {
    /// Allocate the vertex buffer, sized from the context's buffer capacity.
    pub fn new(context: Arc<GraphicsContext>) -> Result<Self, BatchError> {
        let max_buffer_size = context.max_buffer_size();
        let capacity = max_buffer_size / VERTICES_PER_SPRITE;
        if capacity == 0 {
            return Err(BatchError::CapacityTooSmall {
                max_buffer_size,
                required: VERTICES_PER_SPRITE,
            });
        }

        tracing::debug!(
            "Created sprite batch for '{}' with capacity {capacity} quads",
            context.label()
        );

        Ok(Self {
            context,
            vertices: vec![Vertex::default(); capacity * VERTICES_PER_SPRITE],
            capacity,
            pending: 0,
            transform: Mat4::IDENTITY,
            texture: None,
            shader_override: None,
            begun: false,
            stats: BatchStats::default(),
        })
    }

    /// Open a session.
    ///
    /// `texture` may be `None` when every draw goes through
    /// [`draw_region`](Self::draw_region), which supplies its own image.
    ///
    /// # Panics
    /// Panics if a session is already open.
    pub fn begin(&mut self, transform: Mat4, texture: Option<Arc<Texture>>, shader: Option<ShaderHandle>) {
        if let Err(err) = self.try_begin(transform, texture, shader) {
            panic!("{err}");
        }
    }

    /// Open a session with an identity transform, no texture and the default shader.
    pub fn begin_identity(&mut self) {
        self.begin(Mat4::IDENTITY, None, None);
    }

    /// Like [`begin`](Self::begin), but reports a nested session as an error.
    pub fn try_begin(
        &mut self,
        transform: Mat4,
        texture: Option<Arc<Texture>>,
        shader: Option<ShaderHandle>,
    ) -> Result<(), BatchError> {
        if self.begun {
            return Err(BatchError::AlreadyBegun(BATCH_NAME));
        }
        self.begun = true;
        self.transform = transform;
        self.texture = texture;
        self.shader_override = shader;
        self.pending = 0;
        self.stats.reset();
        Ok(())
    }

    /// Queue one quad textured with the session texture.
    ///
    /// The unit quad is scaled by `size`, rotated by `rotation` radians about
    /// +Z and translated to `position`. Vertices are tinted opaque white.
    ///
    /// # Panics
    /// Panics outside a session, or if the session has no texture.
    pub fn draw(&mut self, coords: &TextureCoordinates, position: Vec2, size: Vec2, rotation: f32) {
        self.expect_begun();
        if self.texture.is_none() {
            panic!("{}", BatchError::NoActiveTexture);
        }
        if self.pending == self.capacity {
            self.flush_pending();
        }

        let matrix = scale_rotate_translate(size, rotation, position);
        self.write_quad(matrix, coords, Color::WHITE);
    }

    /// Queue a sub-image of `region.image`, tinted with `region.color`.
    ///
    /// The region's image becomes the active texture, replacing the one given
    /// to `begin`. Quads already buffered for a different texture are flushed
    /// first, so each quad is always drawn with the image it was issued with.
    ///
    /// # Panics
    /// Panics outside a session.
    pub fn draw_region(&mut self, region: &SpriteRegion) {
        self.expect_begun();

        let switches_texture = self
            .texture
            .as_ref()
            .is_some_and(|active| active.id() != region.image.id());
        if self.pending == self.capacity || (switches_texture && self.pending > 0) {
            self.flush_pending();
        }
        if switches_texture || self.texture.is_none() {
            self.texture = Some(Arc::clone(&region.image));
        }

        self.write_quad(region.transform(), &region.texture_coordinates(), region.color);
    }

    /// Submit everything buffered so far without closing the session.
    ///
    /// # Panics
    /// Panics outside a session.
    pub fn flush(&mut self) {
        self.expect_begun();
        self.flush_pending();
    }

    /// Close the session, submitting any buffered quads.
    ///
    /// # Panics
    /// Panics if no session is open.
    pub fn end(&mut self) {
        if let Err(err) = self.try_end() {
            panic!("{err}");
        }
    }

    /// Like [`end`](Self::end), but reports a missing session as an error.
    pub fn try_end(&mut self) -> Result<(), BatchError> {
        profile_function!();
        if !self.begun {
            return Err(BatchError::NotBegun(BATCH_NAME));
        }
        self.flush_pending();
        self.begun = false;
        self.texture = None;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Quads buffered and not yet submitted.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }

    pub fn active_texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    fn expect_begun(&self) {
        if !self.begun {
            panic!("{}", BatchError::NotBegun(BATCH_NAME));
        }
    }

    fn write_quad(&mut self, matrix: Mat4, coords: &TextureCoordinates, color: Color) {
        // Corner roles follow QUAD_VERTICES.
        let uvs = [
            coords.top_left,
            coords.bottom_left,
            coords.top_right,
            coords.bottom_left,
            coords.bottom_right,
            coords.top_right,
        ];

        let start = self.pending * VERTICES_PER_SPRITE;
        let slots = &mut self.vertices[start..start + VERTICES_PER_SPRITE];
        for ((slot, corner), uv) in slots.iter_mut().zip(QUAD_VERTICES).zip(uvs) {
            *slot = Vertex::new(matrix.transform_point3(corner), color, uv);
        }

        self.pending += 1;
        self.stats.draws += 1;
    }

    fn flush_pending(&mut self) {
        if self.pending == 0 {
            return;
        }
        profile_scope!("sprite_batch_flush");

        let Some(texture) = self.texture.clone() else {
            unreachable!("quads are only buffered while a texture is active");
        };
        let backend = self.context.backend();

        if texture.take_dirty() {
            tracing::debug!("Re-uploading dirty texture {:?}", texture.id());
            backend.upload_texture_data(&texture);
            self.stats.texture_uploads += 1;
        }

        let shader = self
            .shader_override
            .unwrap_or(self.context.shaders().textured);
        let world = self.context.view_projection() * self.transform;
        backend.use_shader(shader);
        backend.set_uniform(WORLD_UNIFORM, UniformValue::Mat4(world));
        backend.bind_texture(&texture);

        let count = self.pending * VERTICES_PER_SPRITE;
        backend.submit_primitives(PrimitiveKind::TriangleList, &self.vertices[..count]);

        tracing::trace!(
            "Flushed {} quads (texture {:?}, shader {:?})",
            self.pending,
            texture.id(),
            shader
        );

        self.stats.flushes += 1;
        self.stats.vertices_submitted += count as u32;
        self.pending = 0;
    }
}

impl std::fmt::Debug for SpriteBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteBatch")
            .field("capacity", &self.capacity)
            .field("pending", &self.pending)
            .field("begun", &self.begun)
            .field("texture", &self.texture.as_ref().map(|t| t.id()))
            .field("shader_override", &self.shader_override)
            .finish_non_exhaustive()
    }
}
