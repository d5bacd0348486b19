//! Frame-synchronous batching for a 2D renderer.
//!
//! Draw requests for sprites and line segments are accumulated into
//! fixed-capacity vertex buffers and handed to a [`RenderBackend`] in as few
//! submissions as possible. Draw order is preserved exactly, including across
//! the intermediate flushes a full buffer forces.
//!
//! Each frame the driver opens a batch with `begin`, issues `draw` calls in
//! world space and closes it with `end`. Batches touch the backend only while
//! flushing: texture re-uploads, shader selection, uniform upload, texture
//! binding and primitive submission all happen there.
//!
//! ```ignore
//! let context = GraphicsContext::new(backend, GraphicsContextDescriptor::default());
//! let mut sprites = SpriteBatch::new(context.clone())?;
//! let mut lines = LineBatch::new(context.clone())?;
//!
//! context.apply_camera(&camera);
//!
//! sprites.begin(Mat4::IDENTITY, Some(texture), None);
//! sprites.draw(&TextureCoordinates::default(), position, size, angle);
//! sprites.end();
//!
//! lines.begin(Mat4::IDENTITY);
//! lines.draw(Vec2::ZERO, Vec2::new(100.0, 0.0), Color::RED);
//! lines.end();
//! ```

pub mod backend;
pub mod camera;
mod color;
pub mod context;
pub mod error;
pub mod line_batch;
pub mod shader;
pub mod sprite_batch;
mod stats;
mod tex_coords;
pub mod texture;
pub mod vertex;

pub use backend::{DEFAULT_MAX_BUFFER_SIZE, RenderBackend};
pub use camera::Camera2D;
pub use color::Color;
pub use context::{GraphicsContext, GraphicsContextDescriptor};
pub use error::{BatchError, TextureError};
pub use line_batch::{LineBatch, LineSegment};
pub use shader::{DefaultShaders, ShaderHandle, UniformValue, WORLD_UNIFORM};
pub use sprite_batch::{SpriteBatch, SpriteRegion};
pub use stats::BatchStats;
pub use tex_coords::TextureCoordinates;
pub use texture::{Texture, TextureId};
pub use vertex::{PrimitiveKind, Vertex};
