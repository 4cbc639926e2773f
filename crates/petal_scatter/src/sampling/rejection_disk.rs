//! Single-candidate rejection sampling over a spawn disk.
use std::f32::consts::TAU;

use glam::Vec2;
use mint::Vector2;
use rand::rand_core::RngCore;

use crate::sampling::viewport::Viewport;
use crate::sampling::{ground_to_world, rand01, rand_in_disk, SpawnSampling};

/// Bounded rejection search for one new position inside a spawn disk.
///
/// The initial candidate is drawn uniformly inside the disk; if it clears the
/// viewport and distance constraints it is returned directly. Otherwise the
/// search expands in annulus offsets of [`min_distance`, 2 × `min_distance`)
/// around active points, retiring a point after `samples_per_active` failed
/// offsets. The search ends at the first accepted candidate; at most one
/// position is ever produced per call.
///
/// [`min_distance`]: RejectionDiskSampling::min_distance
/// [`samples_per_active`]: RejectionDiskSampling::samples_per_active
#[derive(Debug, Clone)]
pub struct RejectionDiskSampling {
    /// Minimum distance to every occupied position, in world units.
    pub min_distance: f32,
    /// Radius of the spawn disk centered on the field origin.
    pub spawn_radius: f32,
    /// Offset samples attempted around an active point before it is retired.
    pub samples_per_active: usize,
}

impl RejectionDiskSampling {
    /// Create a new sampling with the default of 30 offset samples per active
    /// point.
    pub fn new(min_distance: f32, spawn_radius: f32) -> Self {
        Self {
            min_distance,
            spawn_radius,
            samples_per_active: 30,
        }
    }

    /// Sets the number of offset samples attempted per active point.
    pub fn with_samples_per_active(mut self, samples_per_active: usize) -> Self {
        self.samples_per_active = samples_per_active;
        self
    }

    fn far_enough(&self, candidate: Vec2, occupied: &[Vector2<f32>]) -> bool {
        occupied
            .iter()
            .all(|p| candidate.distance(Vec2::from(*p)) >= self.min_distance)
    }

    fn admissible(
        &self,
        candidate: Vec2,
        occupied: &[Vector2<f32>],
        viewport: &dyn Viewport,
    ) -> bool {
        viewport.contains(ground_to_world(candidate).into()) && self.far_enough(candidate, occupied)
    }
}

impl SpawnSampling for RejectionDiskSampling {
    fn sample(
        &self,
        occupied: &[Vector2<f32>],
        viewport: &dyn Viewport,
        rng: &mut dyn RngCore,
    ) -> Option<Vector2<f32>> {
        if !self.min_distance.is_finite()
            || self.min_distance <= 0.0
            || !self.spawn_radius.is_finite()
            || self.spawn_radius <= 0.0
            || self.samples_per_active == 0
        {
            return None;
        }

        let mut result: Option<Vec2> = None;
        let mut active: Vec<Vec2> = Vec::new();

        let initial = rand_in_disk(self.spawn_radius, rng);
        if self.admissible(initial, occupied, viewport) {
            result = Some(initial);
            active.push(initial);
        }

        while result.is_none() && !active.is_empty() {
            let index = ((rand01(rng) * active.len() as f32) as usize).min(active.len() - 1);
            let current = active[index];
            let mut found = false;

            for _ in 0..self.samples_per_active {
                let angle = rand01(rng) * TAU;
                let radius = self.min_distance + rand01(rng) * self.min_distance;
                let candidate = current + Vec2::new(angle.cos(), angle.sin()) * radius;

                if candidate.length() <= self.spawn_radius
                    && self.admissible(candidate, occupied, viewport)
                {
                    result = Some(candidate);
                    active.push(candidate);
                    found = true;
                    break;
                }
            }

            if !found {
                active.swap_remove(index);
            }
        }

        result.map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::viewport::{OpenViewport, ViewportPoint};

    struct ClosedViewport;

    impl Viewport for ClosedViewport {
        fn project(&self, _world: mint::Vector3<f32>) -> ViewportPoint {
            ViewportPoint {
                x: -1.0,
                y: -1.0,
                depth: -1.0,
            }
        }
    }

    #[test]
    fn degenerate_constraints_yield_no_point() {
        let mut rng = StdRng::seed_from_u64(1);
        let viewport = OpenViewport;

        assert!(RejectionDiskSampling::new(0.0, 10.0)
            .sample(&[], &viewport, &mut rng)
            .is_none());
        assert!(RejectionDiskSampling::new(2.0, 0.0)
            .sample(&[], &viewport, &mut rng)
            .is_none());
        assert!(RejectionDiskSampling::new(2.0, 10.0)
            .with_samples_per_active(0)
            .sample(&[], &viewport, &mut rng)
            .is_none());
    }

    #[test]
    fn unconstrained_field_returns_the_initial_draw() {
        let sampling = RejectionDiskSampling::new(2.0, 10.0);
        let viewport = OpenViewport;

        let mut draw_rng = StdRng::seed_from_u64(99);
        let expected = rand_in_disk(10.0, &mut draw_rng);

        let mut rng = StdRng::seed_from_u64(99);
        let point = sampling
            .sample(&[], &viewport, &mut rng)
            .expect("empty field accepts the initial draw");
        assert_eq!(Vec2::from(point), expected);
    }

    #[test]
    fn accepted_points_stay_inside_the_spawn_disk() {
        let sampling = RejectionDiskSampling::new(1.0, 5.0);
        let viewport = OpenViewport;

        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(p) = sampling.sample(&[], &viewport, &mut rng) {
                assert!(Vec2::from(p).length() <= 5.0 + 1e-4);
            }
        }
    }

    #[test]
    fn accepted_points_keep_their_distance_from_occupied() {
        let sampling = RejectionDiskSampling::new(2.0, 10.0);
        let viewport = OpenViewport;
        let occupied: Vec<Vector2<f32>> = vec![
            Vec2::new(0.0, 0.0).into(),
            Vec2::new(3.0, 3.0).into(),
            Vec2::new(-4.0, 1.0).into(),
        ];

        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(p) = sampling.sample(&occupied, &viewport, &mut rng) {
                let p = Vec2::from(p);
                for q in &occupied {
                    assert!(p.distance(Vec2::from(*q)) >= 2.0 - 1e-4);
                }
            }
        }
    }

    #[test]
    fn closed_viewport_rejects_every_candidate() {
        let sampling = RejectionDiskSampling::new(2.0, 10.0);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sampling.sample(&[], &ClosedViewport, &mut rng).is_none());
    }

    #[test]
    fn crowded_field_yields_no_point() {
        // Occupied positions on a dense grid leave no admissible gap.
        let sampling = RejectionDiskSampling::new(4.0, 6.0);
        let viewport = OpenViewport;
        let mut occupied = Vec::new();
        let mut x = -8.0f32;
        while x <= 8.0 {
            let mut y = -8.0f32;
            while y <= 8.0 {
                occupied.push(Vector2 { x, y });
                y += 2.0;
            }
            x += 2.0;
        }

        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(sampling.sample(&occupied, &viewport, &mut rng).is_none());
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let sampling = RejectionDiskSampling::new(2.0, 10.0);
        let viewport = OpenViewport;
        let occupied: Vec<Vector2<f32>> = vec![Vec2::new(1.0, 1.0).into()];

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = sampling.sample(&occupied, &viewport, &mut rng_a);
        let b = sampling.sample(&occupied, &viewport, &mut rng_b);
        assert_eq!(a.map(Vec2::from), b.map(Vec2::from));
    }
}
