//! Configuration for petal ring layout.
use crate::error::{Error, Result};

/// Angular step between consecutive petals that yields non-repeating, even
/// coverage, in degrees.
pub const GOLDEN_ANGLE_DEGREES: f32 = 137.5;

/// Configuration for one flower's petal rings.
///
/// `ring_radii` and `petals_per_ring` are positional: entry `i` describes ring
/// `i`. Both must have exactly `ring_count` entries; [`FlowerConfig::validate`]
/// rejects anything else before layout runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowerConfig {
    /// Number of concentric petal rings.
    pub ring_count: usize,
    /// Radius of each ring in world units.
    pub ring_radii: Vec<f32>,
    /// Petal count for each ring.
    pub petals_per_ring: Vec<usize>,
    /// Angular step between consecutive petals in degrees.
    pub angle_step_degrees: f32,
    /// Scale applied to the angular step.
    pub angle_scale: f32,
    /// Starting angle for the first petal in degrees.
    pub start_angle_degrees: f32,
    /// Vertical lift applied to petals of the first ring.
    pub first_ring_lift: f32,
    /// Upward tilt in degrees applied to petals of the first ring.
    pub first_ring_tilt_degrees: f32,
    /// Asset id of the petal template realized by the embedding application.
    pub petal_asset: String,
    /// Whether the whole flower spins around its vertical axis.
    pub spin: bool,
    /// Spin speed in degrees per second.
    pub spin_speed_degrees: f32,
}

impl FlowerConfig {
    /// Creates a config for `ring_count` rings with default angles and no
    /// rings assigned yet.
    pub fn new(ring_count: usize) -> Self {
        Self {
            ring_count,
            ring_radii: Vec::new(),
            petals_per_ring: Vec::new(),
            angle_step_degrees: GOLDEN_ANGLE_DEGREES,
            angle_scale: 1.0,
            start_angle_degrees: 0.0,
            first_ring_lift: 0.1,
            first_ring_tilt_degrees: 15.0,
            petal_asset: String::new(),
            spin: false,
            spin_speed_degrees: 10.0,
        }
    }

    /// Sets the per-ring radii.
    pub fn with_ring_radii(mut self, ring_radii: Vec<f32>) -> Self {
        self.ring_radii = ring_radii;
        self
    }

    /// Sets the per-ring petal counts.
    pub fn with_petals_per_ring(mut self, petals_per_ring: Vec<usize>) -> Self {
        self.petals_per_ring = petals_per_ring;
        self
    }

    /// Sets the angular step in degrees.
    pub fn with_angle_step_degrees(mut self, angle_step_degrees: f32) -> Self {
        self.angle_step_degrees = angle_step_degrees;
        self
    }

    /// Sets the scale applied to the angular step.
    pub fn with_angle_scale(mut self, angle_scale: f32) -> Self {
        self.angle_scale = angle_scale;
        self
    }

    /// Sets the starting angle in degrees.
    pub fn with_start_angle_degrees(mut self, start_angle_degrees: f32) -> Self {
        self.start_angle_degrees = start_angle_degrees;
        self
    }

    /// Sets the vertical lift for first-ring petals.
    pub fn with_first_ring_lift(mut self, first_ring_lift: f32) -> Self {
        self.first_ring_lift = first_ring_lift;
        self
    }

    /// Sets the upward tilt for first-ring petals in degrees.
    pub fn with_first_ring_tilt_degrees(mut self, first_ring_tilt_degrees: f32) -> Self {
        self.first_ring_tilt_degrees = first_ring_tilt_degrees;
        self
    }

    /// Sets the petal asset id.
    pub fn with_petal_asset(mut self, petal_asset: impl Into<String>) -> Self {
        self.petal_asset = petal_asset.into();
        self
    }

    /// Enables whole-flower spin at the given speed in degrees per second.
    pub fn with_spin(mut self, spin_speed_degrees: f32) -> Self {
        self.spin = true;
        self.spin_speed_degrees = spin_speed_degrees;
        self
    }

    /// Total petal count over all rings.
    pub fn total_petals(&self) -> usize {
        self.petals_per_ring.iter().sum()
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.petal_asset.is_empty() {
            return Err(Error::InvalidConfig("petal_asset is not assigned".into()));
        }
        if self.ring_radii.len() != self.ring_count {
            return Err(Error::InvalidConfig(format!(
                "ring_radii must have {} entries, found {}",
                self.ring_count,
                self.ring_radii.len()
            )));
        }
        if self.petals_per_ring.len() != self.ring_count {
            return Err(Error::InvalidConfig(format!(
                "petals_per_ring must have {} entries, found {}",
                self.ring_count,
                self.petals_per_ring.len()
            )));
        }
        if self
            .ring_radii
            .iter()
            .any(|r| !r.is_finite() || *r <= 0.0)
        {
            return Err(Error::InvalidConfig(
                "ring_radii entries must be finite and > 0".into(),
            ));
        }
        if !self.angle_step_degrees.is_finite() || !self.angle_scale.is_finite() {
            return Err(Error::InvalidConfig(
                "angle step and scale must be finite".into(),
            ));
        }

        Ok(())
    }
}
