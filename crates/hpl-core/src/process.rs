//! Per-particle process aggregation and registration.
//!
//! A [`HadronicProcess`] collects the ordered model handles and the
//! cross-section datasets for one interaction kind. A [`ProcessManager`]
//! is the per-species registry the host toolkit consults during tracking;
//! it is append-only, and it takes ownership of a process at registration.
//! A [`ParticleRegistry`] maps species to managers and is owned by exactly
//! one worker.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{CrossSectionSet, InteractionModel};
use crate::species::Species;

/// Interaction kind a process implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessKind {
    /// Scattering without change of particle identity.
    Elastic,
    /// Interaction producing new particle species.
    Inelastic,
    /// Capture triggered when the particle comes to rest.
    CaptureAtRest,
}

impl ProcessKind {
    /// Stable lowercase label used in summaries and error context.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessKind::Elastic => "elastic",
            ProcessKind::Inelastic => "inelastic",
            ProcessKind::CaptureAtRest => "capture-at-rest",
        }
    }
}

/// One per-particle, per-interaction-kind process.
///
/// Models are consulted in registration order; when validity ranges
/// overlap, the first registered model wins inside the toolkit's internal
/// selection, so callers register low-energy models first.
#[derive(Debug, Clone)]
pub struct HadronicProcess {
    kind: ProcessKind,
    models: Vec<Arc<InteractionModel>>,
    datasets: Vec<Arc<CrossSectionSet>>,
}

impl HadronicProcess {
    /// Creates an empty process of the given kind.
    pub fn new(kind: ProcessKind) -> Self {
        Self {
            kind,
            models: Vec::new(),
            datasets: Vec::new(),
        }
    }

    /// Appends a model handle. Order is preserved.
    pub fn register_model(&mut self, model: Arc<InteractionModel>) {
        self.models.push(model);
    }

    /// Appends a cross-section dataset handle. Order is preserved.
    pub fn add_dataset(&mut self, dataset: Arc<CrossSectionSet>) {
        self.datasets.push(dataset);
    }

    /// Interaction kind.
    pub fn kind(&self) -> ProcessKind {
        self.kind
    }

    /// Registered model handles in registration order.
    pub fn models(&self) -> &[Arc<InteractionModel>] {
        &self.models
    }

    /// Attached dataset handles in attachment order.
    pub fn datasets(&self) -> &[Arc<CrossSectionSet>] {
        &self.datasets
    }
}

/// Per-species registry of active processes.
///
/// Appending is the only mutation; nothing removes or reorders a
/// registered process.
#[derive(Debug, Clone, Default)]
pub struct ProcessManager {
    discrete: Vec<HadronicProcess>,
    at_rest: Vec<HadronicProcess>,
}

impl ProcessManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a discrete (in-flight) process, taking ownership.
    pub fn add_discrete_process(&mut self, process: HadronicProcess) {
        self.discrete.push(process);
    }

    /// Registers an at-rest process, taking ownership.
    pub fn add_rest_process(&mut self, process: HadronicProcess) {
        self.at_rest.push(process);
    }

    /// Registered discrete processes in registration order.
    pub fn discrete_processes(&self) -> &[HadronicProcess] {
        &self.discrete
    }

    /// Registered at-rest processes in registration order.
    pub fn rest_processes(&self) -> &[HadronicProcess] {
        &self.at_rest
    }

    /// First discrete process of the given kind, if any.
    pub fn find_discrete(&self, kind: ProcessKind) -> Option<&HadronicProcess> {
        self.discrete.iter().find(|p| p.kind() == kind)
    }

    /// Number of discrete processes of the given kind.
    pub fn count_discrete(&self, kind: ProcessKind) -> usize {
        self.discrete.iter().filter(|p| p.kind() == kind).count()
    }
}

/// Worker-owned map from species to process manager.
///
/// Insertion order is preserved so that summaries and iteration follow the
/// wiring order. One registry exists per worker; registries are never
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ParticleRegistry {
    managers: IndexMap<Species, ProcessManager>,
}

impl ParticleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process manager for `species`, created on first access.
    pub fn process_manager(&mut self, species: Species) -> &mut ProcessManager {
        self.managers.entry(species).or_default()
    }

    /// The process manager for `species`, if one was ever accessed.
    pub fn manager(&self, species: Species) -> Option<&ProcessManager> {
        self.managers.get(&species)
    }

    /// Species with managers, in first-access order.
    pub fn species(&self) -> impl ExactSizeIterator<Item = Species> + '_ {
        self.managers.keys().copied()
    }

    /// Number of species with managers.
    pub fn len(&self) -> usize {
        self.managers.len()
    }

    /// Whether no manager has been created yet.
    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}
