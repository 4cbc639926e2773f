//! Spawn orchestration: field state, retries, materials, and events.
pub mod events;
pub mod runner;

/// Identifier of a petal material in the embedding application's palette.
pub type MaterialId = String;

/// Default number of sampling attempts per spawn request.
pub const DEFAULT_SPAWN_RETRIES: usize = 10;
