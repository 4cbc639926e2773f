//! Event types and sinks for observing spawn requests.
//!
//! This module defines [`SpawnEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while a [`crate::spawn::runner::SpawnRunner`]
//! processes spawn requests and resets.
use glam::Vec3;

use crate::spawn::MaterialId;

/// Discriminant for [`SpawnEvent`], used by sinks to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEventKind {
    SpawnStarted,
    AttemptFailed,
    FlowerPlaced,
    SpawnExhausted,
    FieldReset,
    Warning,
}

/// Describes events emitted while processing spawn requests.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SpawnEvent {
    /// Emitted when a spawn request starts.
    SpawnStarted {
        /// Number of sampling attempts the request may use.
        budget: usize,
    },

    /// Emitted when a sampling attempt finds no admissible position.
    AttemptFailed {
        /// One-based attempt number.
        attempt: usize,
    },

    /// Emitted when a flower is placed.
    FlowerPlaced {
        /// World position of the flower.
        position: Vec3,
        /// Material chosen from the palette, if any was configured.
        material: Option<MaterialId>,
        /// Number of petals in the computed layout.
        petal_count: usize,
    },

    /// Emitted when a spawn request exhausts its attempt budget.
    SpawnExhausted {
        /// Number of attempts that were made.
        attempts: usize,
    },

    /// Emitted when the field is reset.
    FieldReset {
        /// Number of positions that were cleared.
        cleared: usize,
    },

    /// Non-fatal warning generated while spawning.
    Warning {
        /// Context string (e.g. the operation that warned).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`SpawnEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SpawnEvent);

    /// Whether the sink cares about events of the given kind. Emitters may
    /// skip constructing events the sink does not want.
    fn wants(&self, _kind: SpawnEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = SpawnEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SpawnEvent) {}

    #[inline]
    fn wants(&self, _kind: SpawnEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SpawnEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SpawnEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SpawnEvent),
{
    #[inline]
    fn send(&mut self, event: SpawnEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SpawnEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<SpawnEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SpawnEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SpawnEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SpawnEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: SpawnEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

/// Minimal adapter trait for types that can expose an [`EventSink`].
pub trait AsEventSink {
    fn as_event_sink(&mut self) -> &mut dyn EventSink;
}
