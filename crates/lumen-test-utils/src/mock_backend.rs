//! Mock implementation of RenderBackend for testing.

use std::collections::HashSet;

use glam::Mat4;
use lumen_render::{
    DEFAULT_MAX_BUFFER_SIZE, DefaultShaders, PrimitiveKind, RenderBackend, ShaderHandle, Texture,
    TextureId, UniformValue, Vertex,
};
use parking_lot::Mutex;

/// Shader handle the mock reports for textured drawing.
pub const MOCK_TEXTURED_SHADER: ShaderHandle = ShaderHandle(1);
/// Shader handle the mock reports for flat-color drawing.
pub const MOCK_FLAT_COLOR_SHADER: ShaderHandle = ShaderHandle(2);

/// Records a backend call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Submit {
        kind: PrimitiveKind,
        vertices: Vec<Vertex>,
    },
    /// First-time upload performed as a side effect of binding.
    InitialUpload {
        texture: TextureId,
    },
    BindTexture {
        texture: TextureId,
    },
    UploadTextureData {
        texture: TextureId,
    },
    UseShader {
        shader: ShaderHandle,
    },
    SetUniform {
        name: String,
        value: UniformValue,
    },
}

/// Mock backend that records calls instead of touching a GPU.
///
/// ```rust
/// use lumen_render::{PrimitiveKind, RenderBackend, Vertex};
/// use lumen_test_utils::MockBackend;
///
/// let mock = MockBackend::new();
/// mock.submit_primitives(PrimitiveKind::LineList, &[Vertex::default(); 2]);
///
/// assert_eq!(mock.count_submissions(), 1);
/// assert_eq!(mock.submissions()[0].1.len(), 2);
/// ```
pub struct MockBackend {
    /// Recorded calls for verification
    calls: Mutex<Vec<BackendCall>>,
    /// Textures that received their initial upload
    uploaded: Mutex<HashSet<TextureId>>,
    max_buffer_size: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_max_buffer_size(DEFAULT_MAX_BUFFER_SIZE)
    }

    /// Create a mock reporting a custom vertex capacity.
    pub fn with_max_buffer_size(max_buffer_size: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            uploaded: Mutex::new(HashSet::new()),
            max_buffer_size,
        }
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls (useful between test steps).
    ///
    /// Textures that were already uploaded stay uploaded.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// All submissions in order, with their primitive kind and vertices.
    pub fn submissions(&self) -> Vec<(PrimitiveKind, Vec<Vertex>)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Submit { kind, vertices } => Some((*kind, vertices.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count_submissions(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Submit { .. }))
    }

    /// Count explicit re-uploads of dirty textures.
    pub fn count_uploads(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::UploadTextureData { .. }))
    }

    pub fn count_initial_uploads(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::InitialUpload { .. }))
    }

    pub fn count_binds(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::BindTexture { .. }))
    }

    /// Textures bound, in order.
    pub fn bound_textures(&self) -> Vec<TextureId> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::BindTexture { texture } => Some(*texture),
                _ => None,
            })
            .collect()
    }

    /// Shaders activated, in order.
    pub fn used_shaders(&self) -> Vec<ShaderHandle> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::UseShader { shader } => Some(*shader),
                _ => None,
            })
            .collect()
    }

    /// Matrices set on the `name` uniform, in order.
    pub fn matrix_uniforms(&self, name: &str) -> Vec<Mat4> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetUniform {
                    name: n,
                    value: UniformValue::Mat4(m),
                } if n == name => Some(*m),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for MockBackend {
    fn submit_primitives(&self, kind: PrimitiveKind, vertices: &[Vertex]) {
        self.calls.lock().push(BackendCall::Submit {
            kind,
            vertices: vertices.to_vec(),
        });
    }

    fn bind_texture(&self, texture: &Texture) {
        let first_use = self.uploaded.lock().insert(texture.id());
        let mut calls = self.calls.lock();
        if first_use {
            calls.push(BackendCall::InitialUpload {
                texture: texture.id(),
            });
        }
        calls.push(BackendCall::BindTexture {
            texture: texture.id(),
        });
    }

    fn upload_texture_data(&self, texture: &Texture) {
        self.uploaded.lock().insert(texture.id());
        self.calls.lock().push(BackendCall::UploadTextureData {
            texture: texture.id(),
        });
    }

    fn use_shader(&self, shader: ShaderHandle) {
        self.calls.lock().push(BackendCall::UseShader { shader });
    }

    fn set_uniform(&self, name: &str, value: UniformValue) {
        self.calls.lock().push(BackendCall::SetUniform {
            name: name.to_string(),
            value,
        });
    }

    fn default_shaders(&self) -> DefaultShaders {
        DefaultShaders {
            textured: MOCK_TEXTURED_SHADER,
            flat_color: MOCK_FLAT_COLOR_SHADER,
        }
    }

    fn max_buffer_size(&self) -> usize {
        self.max_buffer_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_render::Color;

    #[test]
    fn test_bind_uploads_once() {
        let mock = MockBackend::new();
        let texture = Texture::solid(2, 2, Color::WHITE).unwrap();

        mock.bind_texture(&texture);
        mock.bind_texture(&texture);

        assert_eq!(mock.count_initial_uploads(), 1);
        assert_eq!(mock.count_binds(), 2);
    }

    #[test]
    fn test_clear_calls() {
        let mock = MockBackend::new();
        mock.use_shader(MOCK_TEXTURED_SHADER);
        assert_eq!(mock.call_count(), 1);

        mock.clear_calls();
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_matrix_uniforms_filter_by_name() {
        let mock = MockBackend::new();
        mock.set_uniform("world", UniformValue::Mat4(Mat4::IDENTITY));
        mock.set_uniform("other", UniformValue::Mat4(Mat4::ZERO));
        mock.set_uniform("world", UniformValue::Int(0));

        assert_eq!(mock.matrix_uniforms("world"), vec![Mat4::IDENTITY]);
    }
}
