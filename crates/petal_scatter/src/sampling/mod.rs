//! Sampling strategies for proposing flower positions in the ground plane.
//!
//! This module defines the trait used by the spawn runner to search for one
//! admissible position per request, plus viewport containment for candidates.
use glam::{Vec2, Vec3};
use mint::Vector2;
use rand::rand_core::RngCore;

pub mod rejection_disk;
pub mod viewport;

pub use rejection_disk::RejectionDiskSampling;
pub use viewport::{OpenViewport, PerspectiveCamera, Viewport, ViewportPoint};

/// Trait for single-position spawn sampling.
///
/// One call proposes at most one position; `None` means no admissible
/// position was found, which is a normal outcome rather than a fault.
pub trait SpawnSampling: Send + Sync {
    fn sample(
        &self,
        occupied: &[Vector2<f32>],
        viewport: &dyn Viewport,
        rng: &mut dyn RngCore,
    ) -> Option<Vector2<f32>>;
}

/// Lifts a ground-plane position into world space. The ground plane maps to
/// world x/z with a world height of zero.
#[inline]
pub fn ground_to_world(position: Vec2) -> Vec3 {
    Vec3::new(position.x, 0.0, position.y)
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Draw a point uniformly (by area) inside a disk of the given radius
/// centered on the origin.
#[inline]
pub(crate) fn rand_in_disk(radius: f32, rng: &mut dyn RngCore) -> Vec2 {
    let r = radius * rand01(rng).sqrt();
    let theta = rand01(rng) * std::f32::consts::TAU;
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl rand::rand_core::TryRng for FixedRng {
        type Error = core::convert::Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Ok(self.value)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Ok(self.value as u64)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
            Ok(())
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_in_unit_range() {
        // u32::MAX rounds up to 2^32 in f32, so the ratio can land exactly
        // on 1.0; callers that index with it must clamp.
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!((0.0..=1.0).contains(&result));
    }

    #[test]
    fn ground_positions_lift_to_zero_height() {
        let world = ground_to_world(Vec2::new(1.5, -2.0));
        assert_eq!(world, Vec3::new(1.5, 0.0, -2.0));
    }

    #[test]
    fn rand_in_disk_respects_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = rand_in_disk(10.0, &mut rng);
            assert!(p.length() <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn rand_in_disk_is_deterministic_for_same_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(rand_in_disk(5.0, &mut rng_a), rand_in_disk(5.0, &mut rng_b));
    }
}
