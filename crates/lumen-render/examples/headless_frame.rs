//! Draws one frame into the recording backend and logs what reached it.
//!
//! Run with `RUST_LOG=trace` to see every flush.

use std::f32::consts::FRAC_PI_4;
use std::sync::Arc;

use glam::{Mat4, Vec2};
use lumen_core::geometry::Rect;
use lumen_render::{
    Camera2D, Color, GraphicsContext, GraphicsContextDescriptor, LineBatch, SpriteBatch,
    SpriteRegion, Texture, TextureCoordinates,
};
use lumen_test_utils::MockBackend;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lumen_core::logging::init();

    let backend = Arc::new(MockBackend::with_max_buffer_size(600));
    let context = GraphicsContext::new(
        backend.clone(),
        GraphicsContextDescriptor {
            label: Some("headless".to_string()),
            ..Default::default()
        },
    );

    let mut camera = Camera2D::new(Vec2::new(800.0, 600.0));
    camera.set_zoom(1.5);
    context.apply_camera(&camera);

    let mut sprites = SpriteBatch::new(context.clone())?;
    let mut lines = LineBatch::new(context.clone())?;

    let player = Arc::new(Texture::solid(32, 32, Color::from_hex(0x3366FF))?);
    let atlas = Arc::new(Texture::solid(128, 64, Color::WHITE)?);
    atlas.set_pixel(0, 0, Color::RED);

    lumen_core::profiling::new_frame();

    // Scene pass: a field of sprites, more than one buffer's worth.
    sprites.begin(Mat4::IDENTITY, Some(player), None);
    for i in 0..250 {
        let position = Vec2::new((i % 25) as f32 * 32.0 - 400.0, (i / 25) as f32 * 32.0 - 300.0);
        sprites.draw(&TextureCoordinates::default(), position, Vec2::splat(32.0), FRAC_PI_4);
    }
    sprites.end();
    tracing::info!("Scene pass: {:?}", sprites.stats());

    // Overlay pass: atlas regions, one mirrored.
    sprites.begin_identity();
    let frame = Rect::new(0.0, 0.0, 32.0, 32.0);
    sprites.draw_region(&SpriteRegion::new(atlas.clone(), Vec2::new(-100.0, 100.0)).source(frame));
    sprites.draw_region(
        &SpriteRegion::new(atlas, Vec2::new(100.0, 100.0))
            .source(frame.flipped_horizontal())
            .color(Color::rgba(1.0, 1.0, 1.0, 0.5)),
    );
    sprites.end();
    tracing::info!("Overlay pass: {:?}", sprites.stats());

    lines.begin(Mat4::IDENTITY);
    for i in 0..=10 {
        let x = i as f32 * 80.0 - 400.0;
        lines.draw(Vec2::new(x, -300.0), Vec2::new(x, 300.0), Color::GREEN);
    }
    lines.end();
    tracing::info!("Grid pass: {:?}", lines.stats());

    tracing::info!(
        "Backend received {} submissions, {} texture re-uploads, {} calls total",
        backend.count_submissions(),
        backend.count_uploads(),
        backend.call_count()
    );

    Ok(())
}
