//! Tight image demo application
//!
//! Acts as a minimal UI host: loads a sprite and image settings, runs a
//! layout pass, then feeds a grid of pointer positions through the widget's
//! hit test and prints which ones land on the shape.
//!
//! Usage: `shape_demo [SPRITE.ron|toml] [SETTINGS.toml|ron] [WIDTHxHEIGHT]`

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tight_image::foundation::logging;
use tight_image::prelude::*;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;
const MASK_COLUMNS: usize = 64;
const MASK_ROWS: usize = 24;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Invalid frame size '{0}', expected WIDTHxHEIGHT")]
    InvalidFrame(String),
}

fn default_asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
}

fn parse_frame(text: &str) -> Result<(f32, f32), DemoError> {
    let invalid = || DemoError::InvalidFrame(text.to_string());

    let (width, height) = text.split_once('x').ok_or_else(invalid)?;
    let width: f32 = width.trim().parse().map_err(|_| invalid())?;
    let height: f32 = height.trim().parse().map_err(|_| invalid())?;

    if width < 0.0 || height < 0.0 {
        return Err(invalid());
    }
    Ok((width, height))
}

/// Sample the frame on a grid and render hits as `#`, misses as `.`
fn hit_mask(image: &TightImage, camera: &UICamera) -> (String, usize) {
    let transform = &image.image().transform;
    let frame = transform.rect;
    let mut mask = String::with_capacity((MASK_COLUMNS + 1) * MASK_ROWS);
    let mut hits = 0;

    for row in 0..MASK_ROWS {
        for column in 0..MASK_COLUMNS {
            let local = frame.min()
                + Vec2::new(
                    (column as f32 + 0.5) / MASK_COLUMNS as f32 * frame.width,
                    (row as f32 + 0.5) / MASK_ROWS as f32 * frame.height,
                );
            let screen = camera.canvas_to_screen(transform.local_to_canvas(local));

            if image.is_raycast_location_valid(screen, Some(camera)) {
                hits += 1;
                mask.push('#');
            } else {
                mask.push('.');
            }
        }
        mask.push('\n');
    }

    (mask, hits)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sprite_path = args.first().map_or_else(|| default_asset("star.ron"), PathBuf::from);
    let settings_path = args.get(1).map_or_else(|| default_asset("image.toml"), PathBuf::from);
    let (width, height) = parse_frame(args.get(2).map_or("240x120", String::as_str))?;

    log::info!("Starting tight image demo");

    let sprite = SpriteGeometry::load(&sprite_path)?;
    let config = ImageConfig::load_from_file(&settings_path)?;
    log::info!(
        "Sprite {}: {} vertices, {} triangles; settings {:?}",
        sprite_path.display(),
        sprite.vertex_count(),
        sprite.triangle_count(),
        config
    );

    let camera = UICamera::for_window(WINDOW_WIDTH, WINDOW_HEIGHT);
    let transform = RectTransform::centered(width, height);
    let mut image = TightImage::from_image(
        UIImage::from_config(transform, &config).with_sprite(Arc::new(sprite)),
    );

    // Layout pass
    let mesh = image.rebuild();
    log::info!(
        "Populated mesh: {} vertices, {} triangles, {} vertex bytes",
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len()
    );

    // Input pass
    let (mask, hits) = hit_mask(&image, &camera);
    let samples = MASK_COLUMNS * MASK_ROWS;

    println!("{mask}");
    println!(
        "{hits} of {samples} samples inside the {width}x{height} frame hit the shape ({:.1}%)",
        hits as f32 * 100.0 / samples as f32
    );

    Ok(())
}
