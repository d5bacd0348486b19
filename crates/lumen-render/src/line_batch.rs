//! Batched flat-colored line segments.

use std::sync::Arc;

use glam::{Mat4, Vec2};
use lumen_core::profiling::{profile_function, profile_scope};

use crate::Color;
use crate::context::GraphicsContext;
use crate::error::BatchError;
use crate::shader::{UniformValue, WORLD_UNIFORM};
use crate::stats::BatchStats;
use crate::vertex::{PrimitiveKind, Vertex};

pub const VERTICES_PER_LINE: usize = 2;

const BATCH_NAME: &str = "LineBatch";

/// A line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// Accumulates line segments and submits them as line lists with the
/// flat-color shader.
pub struct LineBatch {
    context: Arc<GraphicsContext>,
    vertices: Vec<Vertex>,
    /// Vertices written since the last flush
    pending: usize,
    transform: Mat4,
    begun: bool,
    stats: BatchStats,
}

impl LineBatch {
    /// Allocate a buffer of the context's full vertex capacity.
    pub fn new(context: Arc<GraphicsContext>) -> Result<Self, BatchError> {
        let max_buffer_size = context.max_buffer_size();
        if max_buffer_size < VERTICES_PER_LINE {
            return Err(BatchError::CapacityTooSmall {
                max_buffer_size,
                required: VERTICES_PER_LINE,
            });
        }

        tracing::debug!(
            "Created line batch for '{}' with capacity {max_buffer_size} vertices",
            context.label()
        );

        Ok(Self {
            context,
            vertices: vec![Vertex::default(); max_buffer_size],
            pending: 0,
            transform: Mat4::IDENTITY,
            begun: false,
            stats: BatchStats::default(),
        })
    }

    /// Open a session.
    ///
    /// # Panics
    /// Panics if a session is already open.
    pub fn begin(&mut self, transform: Mat4) {
        if let Err(err) = self.try_begin(transform) {
            panic!("{err}");
        }
    }

    pub fn try_begin(&mut self, transform: Mat4) -> Result<(), BatchError> {
        if self.begun {
            return Err(BatchError::AlreadyBegun(BATCH_NAME));
        }
        self.begun = true;
        self.transform = transform;
        self.pending = 0;
        self.stats.reset();
        Ok(())
    }

    /// Queue a segment from `start` to `end`.
    ///
    /// # Panics
    /// Panics outside a session.
    pub fn draw(&mut self, start: Vec2, end: Vec2, color: Color) {
        if !self.begun {
            panic!("{}", BatchError::NotBegun(BATCH_NAME));
        }
        if self.pending + VERTICES_PER_LINE > self.vertices.len() {
            self.flush_pending();
        }

        self.vertices[self.pending] = Vertex::new(start.extend(0.0), color, Vec2::ZERO);
        self.vertices[self.pending + 1] = Vertex::new(end.extend(0.0), color, Vec2::ZERO);
        self.pending += VERTICES_PER_LINE;
        self.stats.draws += 1;
    }

    pub fn draw_segment(&mut self, segment: LineSegment) {
        self.draw(segment.start, segment.end, segment.color);
    }

    /// Submit everything buffered so far without closing the session.
    ///
    /// # Panics
    /// Panics outside a session.
    pub fn flush(&mut self) {
        if !self.begun {
            panic!("{}", BatchError::NotBegun(BATCH_NAME));
        }
        self.flush_pending();
    }

    /// Close the session, submitting any buffered segments.
    ///
    /// # Panics
    /// Panics if no session is open.
    pub fn end(&mut self) {
        if let Err(err) = self.try_end() {
            panic!("{err}");
        }
    }

    pub fn try_end(&mut self) -> Result<(), BatchError> {
        profile_function!();
        if !self.begun {
            return Err(BatchError::NotBegun(BATCH_NAME));
        }
        self.flush_pending();
        self.begun = false;
        Ok(())
    }

    /// Segments the buffer holds before a flush is forced.
    pub fn capacity(&self) -> usize {
        self.vertices.len() / VERTICES_PER_LINE
    }

    /// Vertex capacity of the buffer. An odd trailing slot is never used.
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Segments buffered and not yet submitted.
    pub fn pending(&self) -> usize {
        self.pending / VERTICES_PER_LINE
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    fn flush_pending(&mut self) {
        if self.pending == 0 {
            return;
        }
        profile_scope!("line_batch_flush");

        let backend = self.context.backend();
        let shader = self.context.shaders().flat_color;
        backend.use_shader(shader);
        backend.set_uniform(
            WORLD_UNIFORM,
            UniformValue::Mat4(self.context.view_projection() * self.transform),
        );
        backend.submit_primitives(PrimitiveKind::LineList, &self.vertices[..self.pending]);

        tracing::trace!("Flushed {} line segments", self.pending / VERTICES_PER_LINE);

        self.stats.flushes += 1;
        self.stats.vertices_submitted += self.pending as u32;
        self.pending = 0;
    }
}

impl std::fmt::Debug for LineBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBatch")
            .field("capacity", &self.vertices.len())
            .field("pending", &self.pending)
            .field("begun", &self.begun)
            .finish_non_exhaustive()
    }
}
