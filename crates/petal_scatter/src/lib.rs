#![forbid(unsafe_code)]
//! petal_scatter: procedural flower fields with ring-based petal layout and
//! rejection-sampled spawn placement.
//!
//! Modules:
//! - layout: per-flower petal rings (golden-angle progression, outward orientation)
//! - sampling: spawn-position search in the ground plane, viewport containment
//! - spawn: runner that tracks occupied positions, retries, materials, events
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod layout;
pub mod sampling;
pub mod spawn;

/// Convenient re-exports for common types. Import with `use petal_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::layout::{
        generate_petals, look_rotation, spin_rotation, FlowerConfig, PetalPlacement,
        GOLDEN_ANGLE_DEGREES,
    };
    pub use crate::sampling::{
        ground_to_world, OpenViewport, PerspectiveCamera, RejectionDiskSampling, SpawnSampling,
        Viewport, ViewportPoint,
    };
    pub use crate::spawn::events::{
        AsEventSink, EventSink, FnSink, MultiSink, SpawnEvent, SpawnEventKind, VecSink,
    };
    pub use crate::spawn::runner::{FlowerPlacement, SpawnConfig, SpawnRunner};
    pub use crate::spawn::{MaterialId, DEFAULT_SPAWN_RETRIES};
}
