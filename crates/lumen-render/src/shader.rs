use glam::{Mat4, Vec4};

/// Name of the world-transform uniform every batch shader exposes.
pub const WORLD_UNIFORM: &str = "world";

/// Opaque handle to a shader program owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// A value that can be bound to a named shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec4(Vec4),
    Float(f32),
    Int(i32),
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        Self::Vec4(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

/// The programs batches fall back to when no override is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultShaders {
    /// Samples the bound texture and multiplies by vertex color.
    pub textured: ShaderHandle,
    /// Outputs vertex color only.
    pub flat_color: ShaderHandle,
}
