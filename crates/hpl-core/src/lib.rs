#![deny(missing_docs)]
#![doc = "Core types for hadronic process-list wiring: energy units, species identifiers, opaque model and cross-section handles, per-species process managers, primary-event data, structured errors, and deterministic RNG."]

/// Structured error types shared across HPL crates.
pub mod errors;
/// Primary-event data mutated by the generator adapter.
pub mod event;
/// Opaque interaction-model and cross-section handles.
pub mod models;
/// Process aggregation, per-species managers, and the worker registry.
pub mod process;
/// Deterministic RNG handle and per-event seed derivation.
pub mod rng;
/// Particle species identifiers.
pub mod species;
/// Energy units and validity ranges.
pub mod units;

pub use errors::{ErrorInfo, HplError};
pub use event::{Event, PrimaryParticle, PrimaryVertex};
pub use models::{CrossSectionSet, DatasetKind, InteractionModel, ModelKind};
pub use process::{HadronicProcess, ParticleRegistry, ProcessKind, ProcessManager};
pub use rng::{event_stream_seed, RngHandle};
pub use species::Species;
pub use units::{EnergyRange, DEFAULT_MAX_ENERGY, EV, GEV, KEV, MEV, TEV};
