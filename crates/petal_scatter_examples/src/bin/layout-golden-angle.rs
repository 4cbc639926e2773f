use petal_scatter::prelude::*;
use petal_scatter_examples::{init_tracing, render_flower_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = FlowerConfig::new(2)
        .with_ring_radii(vec![1.2, 2.0])
        .with_petals_per_ring(vec![13, 21])
        .with_petal_asset("petal");

    let petals = generate_petals(&config)?;
    info!(
        "generated {} petals across {} rings",
        petals.len(),
        config.ring_count
    );

    let render = RenderConfig::new((800, 800), 5.0);
    render_flower_to_png(&petals, &render, "layout-golden-angle.png")?;
    Ok(())
}
