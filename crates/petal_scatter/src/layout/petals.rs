//! Petal placement around concentric rings.
use glam::{Mat3, Quat, Vec3};

use crate::error::Result;
use crate::layout::config::FlowerConfig;

/// Pitch correction aligning the petal template with the outward axis, in
/// degrees.
const BASE_PITCH_DEGREES: f32 = 90.0;

/// A single petal pose, local to the flower origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalPlacement {
    /// Offset from the flower origin.
    pub position: Vec3,
    /// Orientation facing outward from the flower axis.
    pub rotation: Quat,
}

/// Computes the petal placements for one flower.
///
/// Placements come out ring-major, sequential within each ring. A single petal
/// index advances across ring boundaries, so the first petal of ring `i + 1`
/// continues the angular progression where ring `i` stopped. First-ring petals
/// are lifted by [`FlowerConfig::first_ring_lift`] and tilted upward by
/// [`FlowerConfig::first_ring_tilt_degrees`]; the tilt composes after the
/// outward-facing rotation.
pub fn generate_petals(config: &FlowerConfig) -> Result<Vec<PetalPlacement>> {
    config.validate()?;

    let base_pitch = Quat::from_rotation_x(BASE_PITCH_DEGREES.to_radians());
    let tilt = Quat::from_rotation_x(-config.first_ring_tilt_degrees.to_radians());

    let mut petals = Vec::with_capacity(config.total_petals());
    let mut index = 0usize;

    for (ring, (&radius, &count)) in config
        .ring_radii
        .iter()
        .zip(&config.petals_per_ring)
        .enumerate()
    {
        for _ in 0..count {
            let angle = (config.start_angle_degrees
                + index as f32 * config.angle_step_degrees * config.angle_scale)
                .to_radians();

            let mut position = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());

            let rotation = if ring == 0 {
                // Lift first, so the outward rotation sees the lifted position.
                position.y += config.first_ring_lift;
                look_rotation(position) * base_pitch * tilt
            } else {
                look_rotation(position) * base_pitch
            };

            petals.push(PetalPlacement { position, rotation });
            index += 1;
        }
    }

    Ok(petals)
}

/// Rotation pointing the local +Z axis from the origin toward `target`, with
/// +Y as the up hint.
///
/// Returns [`Quat::IDENTITY`] when `target` coincides with the origin, and
/// falls back to +X as the lateral axis when `target` is collinear with +Y.
pub fn look_rotation(target: Vec3) -> Quat {
    let forward = target.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = Vec3::Y.cross(forward).normalize_or_zero();
    if right == Vec3::ZERO {
        right = Vec3::X;
    }
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Accumulated whole-flower rotation about the vertical axis after
/// `elapsed_seconds`. Identity when spin is disabled.
pub fn spin_rotation(config: &FlowerConfig, elapsed_seconds: f32) -> Quat {
    if !config.spin {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y((config.spin_speed_degrees * elapsed_seconds).to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_ring_config() -> FlowerConfig {
        FlowerConfig::new(2)
            .with_ring_radii(vec![3.0, 5.0])
            .with_petals_per_ring(vec![3, 5])
            .with_petal_asset("petal")
    }

    fn horizontal_radius(p: Vec3) -> f32 {
        (p.x * p.x + p.z * p.z).sqrt()
    }

    fn assert_quat_eq(a: Quat, b: Quat) {
        assert!(
            a.dot(b).abs() > 1.0 - 1e-5,
            "quaternions differ: {a:?} vs {b:?}"
        );
    }

    #[test]
    fn placement_count_and_ring_order() {
        let petals = generate_petals(&two_ring_config()).unwrap();
        assert_eq!(petals.len(), 8);

        for p in &petals[..3] {
            assert!((horizontal_radius(p.position) - 3.0).abs() < 1e-4);
        }
        for p in &petals[3..] {
            assert!((horizontal_radius(p.position) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn petal_index_runs_across_ring_boundaries() {
        let petals = generate_petals(&two_ring_config()).unwrap();

        // Ring 1 starts at global index 3: 3 * 137.5 = 412.5 degrees.
        let angle = 412.5f32.to_radians();
        let first_outer = petals[3].position;
        assert!((first_outer.x - 5.0 * angle.cos()).abs() < 1e-4);
        assert!((first_outer.z - 5.0 * angle.sin()).abs() < 1e-4);
        assert_eq!(first_outer.y, 0.0);
    }

    #[test]
    fn start_angle_and_scale_shift_the_progression() {
        let config = two_ring_config()
            .with_start_angle_degrees(90.0)
            .with_angle_scale(0.5);
        let petals = generate_petals(&config).unwrap();

        let angle = (90.0f32 + 2.0 * 137.5 * 0.5).to_radians();
        let third = petals[2].position;
        assert!((third.x - 3.0 * angle.cos()).abs() < 1e-4);
        assert!((third.z - 3.0 * angle.sin()).abs() < 1e-4);
    }

    #[test]
    fn layout_is_deterministic() {
        let config = two_ring_config();
        let a = generate_petals(&config).unwrap();
        let b = generate_petals(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn only_first_ring_is_lifted_and_tilted() {
        let config = two_ring_config()
            .with_first_ring_lift(0.25)
            .with_first_ring_tilt_degrees(20.0);
        let petals = generate_petals(&config).unwrap();

        let base_pitch = Quat::from_rotation_x(90.0f32.to_radians());
        let tilt = Quat::from_rotation_x(-20.0f32.to_radians());

        for p in &petals[..3] {
            assert!((p.position.y - 0.25).abs() < 1e-6);
            assert_quat_eq(p.rotation, look_rotation(p.position) * base_pitch * tilt);
        }
        for p in &petals[3..] {
            assert_eq!(p.position.y, 0.0);
            assert_quat_eq(p.rotation, look_rotation(p.position) * base_pitch);
        }
    }

    #[test]
    fn first_ring_special_casing_ignores_radius_ordering() {
        // Outer-first radii: the lift still applies to ring index 0.
        let config = two_ring_config().with_ring_radii(vec![5.0, 3.0]);
        let petals = generate_petals(&config).unwrap();
        assert!(petals[0].position.y > 0.0);
        assert_eq!(petals[3].position.y, 0.0);
    }

    #[test]
    fn generate_rejects_invalid_config() {
        let config = two_ring_config().with_petals_per_ring(vec![3]);
        assert!(generate_petals(&config).is_err());
    }

    #[test]
    fn look_rotation_points_forward_at_target() {
        let target = Vec3::new(2.0, 0.5, -1.0);
        let rotated = look_rotation(target) * Vec3::Z;
        assert!(rotated.distance(target.normalize()) < 1e-5);
    }

    #[test]
    fn look_rotation_of_origin_is_identity() {
        assert_eq!(look_rotation(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn look_rotation_handles_vertical_target() {
        let rotated = look_rotation(Vec3::new(0.0, 2.0, 0.0)) * Vec3::Z;
        assert!(rotated.distance(Vec3::Y) < 1e-5);
    }

    #[test]
    fn spin_rotation_is_identity_when_disabled() {
        let config = two_ring_config();
        assert_eq!(spin_rotation(&config, 3.0), Quat::IDENTITY);
    }

    #[test]
    fn spin_rotation_accumulates_over_time() {
        let config = two_ring_config().with_spin(30.0);
        let expected = Quat::from_rotation_y(60.0f32.to_radians());
        assert!(spin_rotation(&config, 2.0).dot(expected).abs() > 1.0 - 1e-5);
    }
}
