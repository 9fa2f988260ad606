//! Serializable wiring summaries.
//!
//! A [`WiringSummary`] is a flat, serde-friendly view of a registry after
//! the constructors have run: per species, the registered processes with
//! their model kinds, validity bounds, and attached datasets. It exists
//! for diagnostics and golden tests; nothing reads it back into wiring.

use serde::{Deserialize, Serialize};

use hpl_core::models::{DatasetKind, ModelKind};
use hpl_core::process::{HadronicProcess, ParticleRegistry, ProcessKind};
use hpl_core::species::Species;

/// One model handle as it appears on a registered process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Model identity.
    pub kind: ModelKind,
    /// Minimum validity energy in MeV.
    pub min_energy: f64,
    /// Maximum validity energy in MeV.
    pub max_energy: f64,
}

/// One registered process with its ordered models and datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Interaction kind.
    pub kind: ProcessKind,
    /// Models in registration order.
    pub models: Vec<ModelSummary>,
    /// Attached cross-section datasets in attachment order.
    pub datasets: Vec<DatasetKind>,
}

impl ProcessSummary {
    fn from_process(process: &HadronicProcess) -> Self {
        Self {
            kind: process.kind(),
            models: process
                .models()
                .iter()
                .map(|model| ModelSummary {
                    kind: model.kind(),
                    min_energy: model.min_energy(),
                    max_energy: model.max_energy(),
                })
                .collect(),
            datasets: process.datasets().iter().map(|xs| xs.kind()).collect(),
        }
    }
}

/// All processes registered for one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSummary {
    /// The species.
    pub species: Species,
    /// Discrete processes in registration order.
    pub discrete: Vec<ProcessSummary>,
    /// At-rest processes in registration order.
    pub at_rest: Vec<ProcessSummary>,
}

/// Registry-wide wiring summary, species in first-access order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WiringSummary {
    /// Per-species process summaries.
    pub species: Vec<SpeciesSummary>,
}

impl WiringSummary {
    /// Summarizes every manager in the registry.
    pub fn from_registry(registry: &ParticleRegistry) -> Self {
        let species = registry
            .species()
            .filter_map(|species| {
                registry.manager(species).map(|manager| SpeciesSummary {
                    species,
                    discrete: manager
                        .discrete_processes()
                        .iter()
                        .map(ProcessSummary::from_process)
                        .collect(),
                    at_rest: manager
                        .rest_processes()
                        .iter()
                        .map(ProcessSummary::from_process)
                        .collect(),
                })
            })
            .collect();
        Self { species }
    }

    /// The summary entry for one species, if present.
    pub fn for_species(&self, species: Species) -> Option<&SpeciesSummary> {
        self.species.iter().find(|entry| entry.species == species)
    }
}
