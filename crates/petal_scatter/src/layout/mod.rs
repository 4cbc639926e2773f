//! Petal layout for a single flower.
//!
//! A flower is a set of concentric petal rings. Petals advance by a fixed
//! angular step (the golden angle by default) with a single index that runs
//! across ring boundaries, so an outer ring continues the angular sequence of
//! the ring before it instead of restarting at zero.
pub mod config;
pub mod petals;

pub use config::{FlowerConfig, GOLDEN_ANGLE_DEGREES};
pub use petals::{generate_petals, look_rotation, spin_rotation, PetalPlacement};
