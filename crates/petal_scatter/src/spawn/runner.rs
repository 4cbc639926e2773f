//! Runner that places flowers across the field, one spawn request at a time.
use glam::{Quat, Vec3};
use mint::Vector2;
use rand::rand_core::RngCore;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::layout::{generate_petals, FlowerConfig, PetalPlacement};
use crate::sampling::{ground_to_world, rand01, SpawnSampling, Viewport};
use crate::spawn::events::{EventSink, SpawnEvent, SpawnEventKind};
use crate::spawn::{MaterialId, DEFAULT_SPAWN_RETRIES};

/// Configuration for spawning flowers into a field.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnConfig {
    /// Asset id of the flower template realized by the embedding application.
    pub flower_asset: String,
    /// Palette of petal materials; one is chosen uniformly per flower.
    pub materials: Vec<MaterialId>,
    /// Sampling attempts allowed per spawn request.
    pub max_retries: usize,
    /// Petal layout for every spawned flower.
    pub flower: FlowerConfig,
}

impl SpawnConfig {
    /// Creates a new config with an empty palette and the default retry
    /// budget.
    pub fn new(flower_asset: impl Into<String>, flower: FlowerConfig) -> Self {
        Self {
            flower_asset: flower_asset.into(),
            materials: Vec::new(),
            max_retries: DEFAULT_SPAWN_RETRIES,
            flower,
        }
    }

    /// Sets the material palette.
    pub fn with_materials(mut self, materials: Vec<MaterialId>) -> Self {
        self.materials = materials;
        self
    }

    /// Sets the retry budget per spawn request.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.flower_asset.is_empty() {
            return Err(Error::InvalidConfig("flower_asset is not assigned".into()));
        }
        if self.max_retries == 0 {
            return Err(Error::InvalidConfig("max_retries must be > 0".into()));
        }
        self.flower.validate()
    }
}

/// A spawned flower, ready for the embedding application to realize.
#[derive(Debug, Clone)]
pub struct FlowerPlacement {
    /// Asset id of the flower template.
    pub asset: String,
    /// World position on the ground plane.
    pub position: Vec3,
    /// World orientation; identity at spawn time.
    pub rotation: Quat,
    /// Petal material chosen from the palette, if any was configured.
    pub material: Option<MaterialId>,
    /// Petal poses local to the flower origin.
    pub petals: Vec<PetalPlacement>,
}

/// Processes spawn requests against a field of occupied positions.
///
/// The runner owns the field state: every accepted position is appended to an
/// occupied list that future sampling must keep its distance from. The list
/// only empties on [`SpawnRunner::reset`].
pub struct SpawnRunner {
    config: SpawnConfig,
    sampling: Box<dyn SpawnSampling>,
    viewport: Option<Box<dyn Viewport>>,
    occupied: Vec<Vector2<f32>>,
}

impl SpawnRunner {
    /// Creates a runner after validating the configuration.
    ///
    /// No viewport is attached yet; spawn requests fail with
    /// [`Error::MissingViewport`] until one is set.
    pub fn try_new(config: SpawnConfig, sampling: Box<dyn SpawnSampling>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sampling,
            viewport: None,
            occupied: Vec::new(),
        })
    }

    /// Attaches a viewport, builder style.
    pub fn with_viewport(mut self, viewport: Box<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Attaches or replaces the viewport.
    pub fn set_viewport(&mut self, viewport: Box<dyn Viewport>) {
        self.viewport = Some(viewport);
    }

    /// The runner's configuration.
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Ground-plane positions of every flower spawned since the last reset.
    pub fn occupied(&self) -> &[Vector2<f32>] {
        &self.occupied
    }

    /// Number of flowers spawned since the last reset.
    pub fn flower_count(&self) -> usize {
        self.occupied.len()
    }

    /// Attempts to place one flower.
    ///
    /// Returns `Ok(None)` when no admissible position was found within the
    /// retry budget; the field is left unchanged in that case.
    pub fn request_spawn(&mut self, rng: &mut dyn RngCore) -> Result<Option<FlowerPlacement>> {
        self.request_spawn_with_events(rng, &mut ())
    }

    /// Like [`SpawnRunner::request_spawn`], forwarding progress to `sink`.
    pub fn request_spawn_with_events(
        &mut self,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<Option<FlowerPlacement>> {
        let viewport = self.viewport.as_deref().ok_or(Error::MissingViewport)?;

        if sink.wants(SpawnEventKind::SpawnStarted) {
            sink.send(SpawnEvent::SpawnStarted {
                budget: self.config.max_retries,
            });
        }

        for attempt in 1..=self.config.max_retries {
            if let Some(position) = self.sampling.sample(&self.occupied, viewport, rng) {
                let petals = generate_petals(&self.config.flower)?;
                let material = pick_material(&self.config.materials, rng, sink);
                let placement = FlowerPlacement {
                    asset: self.config.flower_asset.clone(),
                    position: ground_to_world(position.into()),
                    rotation: Quat::IDENTITY,
                    material,
                    petals,
                };

                self.occupied.push(position);
                info!(
                    "flower {} placed at ({:.2}, {:.2}) on attempt {}",
                    self.occupied.len(),
                    position.x,
                    position.y,
                    attempt
                );
                if sink.wants(SpawnEventKind::FlowerPlaced) {
                    sink.send(SpawnEvent::FlowerPlaced {
                        position: placement.position,
                        material: placement.material.clone(),
                        petal_count: placement.petals.len(),
                    });
                }
                return Ok(Some(placement));
            }

            info!("spawn attempt {attempt} found no admissible position");
            if sink.wants(SpawnEventKind::AttemptFailed) {
                sink.send(SpawnEvent::AttemptFailed { attempt });
            }
        }

        warn!(
            "no admissible spawn position after {} attempts",
            self.config.max_retries
        );
        if sink.wants(SpawnEventKind::SpawnExhausted) {
            sink.send(SpawnEvent::SpawnExhausted {
                attempts: self.config.max_retries,
            });
        }
        Ok(None)
    }

    /// Clears every tracked position, as on a scene reload.
    pub fn reset(&mut self) {
        self.reset_with_events(&mut ());
    }

    /// Like [`SpawnRunner::reset`], forwarding the event to `sink`.
    pub fn reset_with_events(&mut self, sink: &mut dyn EventSink) {
        let cleared = self.occupied.len();
        self.occupied.clear();
        info!("field reset; {cleared} flower positions cleared");
        if sink.wants(SpawnEventKind::FieldReset) {
            sink.send(SpawnEvent::FieldReset { cleared });
        }
    }
}

fn pick_material(
    materials: &[MaterialId],
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Option<MaterialId> {
    if materials.is_empty() {
        warn!("no petal materials configured; flower spawns unpainted");
        if sink.wants(SpawnEventKind::Warning) {
            sink.send(SpawnEvent::Warning {
                context: "spawn".into(),
                message: "No petal materials configured".into(),
            });
        }
        return None;
    }

    let index = ((rand01(rng) * materials.len() as f32) as usize).min(materials.len() - 1);
    Some(materials[index].clone())
}
