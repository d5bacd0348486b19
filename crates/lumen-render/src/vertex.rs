//! The vertex record written into batch buffers and the primitive kinds
//! submitted to a backend.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::Color;

/// One vertex: position, color and texture coordinate.
///
/// The layout is fixed (`#[repr(C)]`, 36-byte stride) so a backend can
/// upload a submitted slice with `bytemuck::cast_slice` and no conversion.
///
/// ```text
/// Offset | Field      | Format
/// -------|------------|----------
/// 0      | position   | Float32x3
/// 12     | color      | Float32x4
/// 28     | tex_coords | Float32x2
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4, 2 => Float32x2];

    pub fn new(position: Vec3, color: Color, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    pub fn tex_coords(&self) -> Vec2 {
        Vec2::from_array(self.tex_coords)
    }

    /// Vertex buffer layout for wgpu pipelines consuming submitted batches.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// How a submitted vertex list is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Every three vertices form one triangle.
    TriangleList,
    /// Every two vertices form one line segment.
    LineList,
}

impl PrimitiveKind {
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            PrimitiveKind::TriangleList => 3,
            PrimitiveKind::LineList => 2,
        }
    }

    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            PrimitiveKind::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            PrimitiveKind::LineList => wgpu::PrimitiveTopology::LineList,
        }
    }
}
