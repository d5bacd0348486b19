//! 2D camera producing the view-projection matrix batches compose with.
//!
//! World space is Y-up with the camera centred on [`Camera2D::position`].
//! Screen space is in pixels with a top-left origin and Y pointing down.
//!
//! # Example
//!
//! ```
//! use lumen_render::Camera2D;
//! use glam::Vec2;
//!
//! let mut camera = Camera2D::new(Vec2::new(800.0, 600.0));
//! camera.set_position(Vec2::new(100.0, 0.0));
//! camera.set_zoom(2.0);
//!
//! let world = camera.screen_to_world(Vec2::new(400.0, 300.0));
//! assert!((world - Vec2::new(100.0, 0.0)).length() < 1e-3);
//! ```

use glam::{Mat4, Vec2, Vec3, Vec4};

const NEAR: f32 = -1.0;
const FAR: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct Camera2D {
    /// World-space point at the center of the viewport
    position: Vec2,
    /// Screen pixels per world unit
    zoom: f32,
    /// Viewport size in pixels
    viewport: Vec2,
    /// Cached view-projection matrix
    view_projection_matrix: Mat4,
}

impl Camera2D {
    pub fn new(viewport: Vec2) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport,
            view_projection_matrix: Mat4::IDENTITY,
        };
        camera.update_matrices();
        camera
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_matrices();
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom factor. Non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom <= 0.0 {
            tracing::warn!("Ignoring non-positive camera zoom {zoom}");
            return;
        }
        self.zoom = zoom;
        self.update_matrices();
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Update the viewport size, e.g. after a window resize.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.update_matrices();
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.view_projection_matrix
    }

    /// Convert a pixel position to world space.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        let ndc = Vec2::new(
            (screen_pos.x / self.viewport.x) * 2.0 - 1.0,
            1.0 - (screen_pos.y / self.viewport.y) * 2.0,
        );
        let world = self.view_projection_matrix.inverse() * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        Vec2::new(world.x, world.y) / world.w
    }

    /// Convert a world position to pixel coordinates.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        let clip = self.view_projection_matrix.project_point3(world_pos.extend(0.0));
        Vec2::new(
            (clip.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - clip.y) * 0.5 * self.viewport.y,
        )
    }

    fn update_matrices(&mut self) {
        let half = self.viewport * 0.5;
        let projection = Mat4::orthographic_rh(-half.x, half.x, -half.y, half.y, NEAR, FAR);
        let view = Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_translation((-self.position).extend(0.0));
        self.view_projection_matrix = projection * view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let camera = Camera2D::new(Vec2::new(800.0, 600.0));
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0));
        assert!(world.abs_diff_eq(Vec2::ZERO, 1e-3));
    }

    #[test]
    fn test_top_left_is_negative_x_positive_y() {
        let camera = Camera2D::new(Vec2::new(800.0, 600.0));
        let world = camera.screen_to_world(Vec2::ZERO);
        assert!(world.abs_diff_eq(Vec2::new(-400.0, 300.0), 1e-2));
    }

    #[test]
    fn test_zoom_shrinks_visible_area() {
        let mut camera = Camera2D::new(Vec2::new(800.0, 600.0));
        camera.set_zoom(2.0);
        let world = camera.screen_to_world(Vec2::ZERO);
        assert!(world.abs_diff_eq(Vec2::new(-200.0, 150.0), 1e-2));
    }

    #[test]
    fn test_world_screen_round_trip() {
        let mut camera = Camera2D::new(Vec2::new(640.0, 480.0));
        camera.set_position(Vec2::new(12.0, -7.0));
        let screen = Vec2::new(100.0, 50.0);
        let back = camera.world_to_screen(camera.screen_to_world(screen));
        assert!(back.abs_diff_eq(screen, 1e-2));
    }

    #[test]
    fn test_invalid_zoom_ignored() {
        let mut camera = Camera2D::new(Vec2::new(10.0, 10.0));
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), 1.0);
    }
}
