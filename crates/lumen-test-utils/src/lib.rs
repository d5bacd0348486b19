//! Test utilities for Lumen.
//!
//! [`MockBackend`] implements [`RenderBackend`](lumen_render::RenderBackend)
//! without a GPU. It records every call in order so tests can assert on
//! submission counts, vertex contents and the state transitions a flush
//! performs.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glam::Mat4;
//! use lumen_render::{GraphicsContext, GraphicsContextDescriptor, LineBatch, Color};
//! use lumen_test_utils::MockBackend;
//!
//! let mock = Arc::new(MockBackend::new());
//! let context = GraphicsContext::new(mock.clone(), GraphicsContextDescriptor::default());
//! let mut lines = LineBatch::new(context).unwrap();
//!
//! lines.begin(Mat4::IDENTITY);
//! lines.draw(glam::Vec2::ZERO, glam::Vec2::ONE, Color::RED);
//! lines.end();
//!
//! assert_eq!(mock.count_submissions(), 1);
//! ```
//!
//! # Interior Mutability
//!
//! Backend methods take `&self`, so the recorded calls live behind a
//! `parking_lot::Mutex`.

pub mod mock_backend;

pub use mock_backend::*;
