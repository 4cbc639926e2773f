use glam::Vec3;
use petal_scatter::prelude::*;
use petal_scatter_examples::{init_tracing, render_field_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let flower = FlowerConfig::new(2)
        .with_ring_radii(vec![0.35, 0.6])
        .with_petals_per_ring(vec![13, 21])
        .with_petal_asset("petal");

    let config = SpawnConfig::new("flower", flower)
        .with_materials(vec!["rose".into(), "violet".into(), "marigold".into()]);

    let camera = PerspectiveCamera::look_at(
        Vec3::new(0.0, 16.0, 12.0),
        Vec3::ZERO,
        Vec3::Y,
        60.0f32.to_radians(),
        1.0,
        0.1,
    );

    let mut runner =
        SpawnRunner::try_new(config, Box::new(RejectionDiskSampling::new(2.0, 10.0)))?
            .with_viewport(Box::new(camera));

    let mut sink = FnSink::new(|event| match event {
        SpawnEvent::FlowerPlaced {
            position,
            material,
            petal_count,
        } => {
            info!(
                "placed {petal_count}-petal flower at ({:.2}, {:.2}), material {material:?}",
                position.x, position.z
            );
        }
        SpawnEvent::SpawnExhausted { attempts } => {
            info!("field saturated after {attempts} failed attempts");
        }
        _ => {}
    });

    let mut rng = StdRng::seed_from_u64(42);
    let mut placements = Vec::new();
    for _ in 0..48 {
        match runner.request_spawn_with_events(&mut rng, &mut sink)? {
            Some(placement) => placements.push(placement),
            None => break,
        }
    }
    info!("spawned {} flowers", placements.len());

    let mut render = RenderConfig::new((1000, 1000), 24.0);
    render
        .set_material_color("rose", [219, 112, 147])
        .set_material_color("violet", [138, 43, 226])
        .set_material_color("marigold", [237, 145, 33]);
    render_field_to_png(&placements, &render, "spawn-field-basic.png")?;
    Ok(())
}
