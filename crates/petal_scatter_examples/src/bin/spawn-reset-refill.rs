use petal_scatter::prelude::*;
use petal_scatter_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let flower = FlowerConfig::new(1)
        .with_ring_radii(vec![0.5])
        .with_petals_per_ring(vec![8])
        .with_petal_asset("petal");

    let config = SpawnConfig::new("flower", flower)
        .with_materials(vec!["rose".into()])
        .with_max_retries(8);

    let mut runner =
        SpawnRunner::try_new(config, Box::new(RejectionDiskSampling::new(3.0, 9.0)))?
            .with_viewport(Box::new(OpenViewport));

    let mut rng = StdRng::seed_from_u64(7);

    let first_fill = fill(&mut runner, &mut rng)?;
    info!("first fill placed {first_fill} flowers");

    runner.reset();
    let second_fill = fill(&mut runner, &mut rng)?;
    info!("second fill placed {second_fill} flowers after reset");

    Ok(())
}

fn fill(runner: &mut SpawnRunner, rng: &mut StdRng) -> anyhow::Result<usize> {
    let mut placed = 0;
    while runner.request_spawn(rng)?.is_some() {
        placed += 1;
        if placed >= 200 {
            break;
        }
    }
    Ok(placed)
}
