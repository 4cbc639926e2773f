//! Top-down PNG rendering for example output.
use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use image::{Rgb, RgbImage};
use petal_scatter::layout::PetalPlacement;
use petal_scatter::spawn::runner::FlowerPlacement;

/// Installs a plain fmt subscriber for the example binaries.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

/// Maps a square world window centered on the origin to pixels.
pub struct RenderConfig {
    /// Output image dimensions in pixels.
    pub image_size: (u32, u32),
    /// Width and height of the world window in world units.
    pub world_extent: f32,
    /// Background color.
    pub background: [u8; 3],
    /// Color for flowers without a material.
    pub default_color: [u8; 3],
    material_colors: HashMap<String, [u8; 3]>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), world_extent: f32) -> Self {
        Self {
            image_size,
            world_extent,
            background: [235, 235, 225],
            default_color: [90, 90, 90],
            material_colors: HashMap::new(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Assigns a render color to a material id.
    pub fn set_material_color(&mut self, material: impl Into<String>, color: [u8; 3]) -> &mut Self {
        self.material_colors.insert(material.into(), color);
        self
    }

    fn color_for(&self, material: Option<&str>) -> [u8; 3] {
        material
            .and_then(|m| self.material_colors.get(m).copied())
            .unwrap_or(self.default_color)
    }
}

/// Renders a spawned field: one disk per flower plus a dot per petal.
pub fn render_field_to_png(
    placements: &[FlowerPlacement],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for placement in placements {
        let color = config.color_for(placement.material.as_deref());
        draw_world_point(&mut img, config, placement.position, 4, color);
        for petal in &placement.petals {
            draw_world_point(
                &mut img,
                config,
                placement.position + petal.position,
                1,
                color,
            );
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))
}

/// Renders a single flower's petal layout around the origin.
pub fn render_flower_to_png(
    petals: &[PetalPlacement],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    draw_world_point(&mut img, config, Vec3::ZERO, 3, config.default_color);
    for petal in petals {
        draw_world_point(&mut img, config, petal.position, 2, [200, 80, 120]);
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn draw_world_point(
    img: &mut RgbImage,
    config: &RenderConfig,
    world: Vec3,
    radius_px: i64,
    color: [u8; 3],
) {
    let (width, height) = config.image_size;
    let half = config.world_extent * 0.5;
    let u = (world.x + half) / config.world_extent;
    let v = (world.z + half) / config.world_extent;
    let cx = (u * width as f32).round() as i64;
    let cy = (v * height as f32).round() as i64;

    for dy in -radius_px..=radius_px {
        for dx in -radius_px..=radius_px {
            if dx * dx + dy * dy > radius_px * radius_px {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
