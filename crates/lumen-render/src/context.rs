use std::sync::Arc;

use glam::Mat4;
use parking_lot::RwLock;

use crate::backend::RenderBackend;
use crate::camera::Camera2D;
use crate::shader::DefaultShaders;

/// Configuration for a [`GraphicsContext`].
#[derive(Debug, Clone, Default)]
pub struct GraphicsContextDescriptor {
    /// Vertex capacity of one submission. If None, the backend's
    /// [`RenderBackend::max_buffer_size`] is used; larger values are clamped
    /// to it.
    pub max_buffer_size: Option<usize>,
    /// Name used in log output.
    pub label: Option<String>,
}

/// State shared by every batch of a renderer: the backend, the default
/// shaders, the buffer capacity and the current view-projection matrix.
///
/// Created once after the backend device exists and handed to batches as an
/// `Arc`.
pub struct GraphicsContext {
    backend: Arc<dyn RenderBackend>,
    shaders: DefaultShaders,
    max_buffer_size: usize,
    view_projection: RwLock<Mat4>,
    label: String,
}

impl GraphicsContext {
    pub fn new(backend: Arc<dyn RenderBackend>, descriptor: GraphicsContextDescriptor) -> Arc<Self> {
        let backend_limit = backend.max_buffer_size();
        let max_buffer_size = match descriptor.max_buffer_size {
            Some(requested) if requested > backend_limit => {
                tracing::warn!(
                    "Requested buffer size {requested} exceeds backend limit {backend_limit}, clamping"
                );
                backend_limit
            }
            Some(requested) => requested,
            None => backend_limit,
        };
        let shaders = backend.default_shaders();
        let label = descriptor.label.unwrap_or_else(|| "graphics".to_string());

        tracing::debug!(
            "Created graphics context '{label}' (max buffer size {max_buffer_size} vertices)"
        );

        Arc::new(Self {
            backend,
            shaders,
            max_buffer_size,
            view_projection: RwLock::new(Mat4::IDENTITY),
            label,
        })
    }

    #[inline]
    pub fn backend(&self) -> &dyn RenderBackend {
        self.backend.as_ref()
    }

    pub fn shaders(&self) -> DefaultShaders {
        self.shaders
    }

    pub fn max_buffer_size(&self) -> usize {
        self.max_buffer_size
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The view-projection matrix composed into every flush.
    pub fn view_projection(&self) -> Mat4 {
        *self.view_projection.read()
    }

    pub fn set_view_projection(&self, matrix: Mat4) {
        *self.view_projection.write() = matrix;
    }

    pub fn apply_camera(&self, camera: &Camera2D) {
        self.set_view_projection(camera.view_projection_matrix());
    }
}

impl std::fmt::Debug for GraphicsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsContext")
            .field("label", &self.label)
            .field("shaders", &self.shaders)
            .field("max_buffer_size", &self.max_buffer_size)
            .finish_non_exhaustive()
    }
}
