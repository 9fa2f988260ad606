//! Opaque handles for toolkit-provided interaction models and
//! cross-section datasets.
//!
//! The physics behind these handles lives entirely in the host simulation
//! toolkit. A handle carries the model's identity and its configured
//! validity range; nothing here evaluates an interaction. Handles are
//! configured first and then shared via `Arc`, so a model attached to N
//! processes outlives all N registrations.

use serde::{Deserialize, Serialize};

use crate::units::{EnergyRange, DEFAULT_MAX_ENERGY};

/// Interaction-model kinds this workspace instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// General-purpose hadron elastic scattering.
    HadronElastic,
    /// Elastic scattering of anti-nuclei on nuclei.
    AntiNucleusElastic,
    /// Parameterized nucleon elastic scattering.
    ParameterizedElastic,
    /// Intranuclear cascade for low-energy inelastic interactions.
    IntranuclearCascade,
    /// Theoretical string-model generator for high-energy inelastic
    /// interactions.
    HighEnergyGenerator,
    /// Nuclear capture of a particle that has come to rest.
    NuclearCaptureAtRest,
}

impl ModelKind {
    /// Stable lowercase label used in summaries and error context.
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::HadronElastic => "hadron-elastic",
            ModelKind::AntiNucleusElastic => "anti-nucleus-elastic",
            ModelKind::ParameterizedElastic => "parameterized-elastic",
            ModelKind::IntranuclearCascade => "intranuclear-cascade",
            ModelKind::HighEnergyGenerator => "high-energy-generator",
            ModelKind::NuclearCaptureAtRest => "nuclear-capture-at-rest",
        }
    }
}

/// Handle to one toolkit interaction model with its validity range.
///
/// A freshly constructed model is valid from zero up to the toolkit
/// ceiling; constructors narrow the range before sharing the handle.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionModel {
    kind: ModelKind,
    min_energy: f64,
    max_energy: f64,
}

impl InteractionModel {
    /// Creates a model handle valid over the full toolkit energy span.
    pub fn new(kind: ModelKind) -> Self {
        Self {
            kind,
            min_energy: 0.0,
            max_energy: DEFAULT_MAX_ENERGY,
        }
    }

    /// The model's identity.
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Lowers or raises the minimum validity energy.
    pub fn set_min_energy(&mut self, energy: f64) {
        self.min_energy = energy;
    }

    /// Lowers or raises the maximum validity energy.
    pub fn set_max_energy(&mut self, energy: f64) {
        self.max_energy = energy;
    }

    /// Minimum validity energy.
    pub fn min_energy(&self) -> f64 {
        self.min_energy
    }

    /// Maximum validity energy.
    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }

    /// The configured validity interval.
    pub fn valid_range(&self) -> EnergyRange {
        EnergyRange {
            min: self.min_energy,
            max: self.max_energy,
        }
    }
}

/// Cross-section dataset kinds attached to processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// Elastic cross sections for anti-nuclei on nuclei.
    AntiNucleusElastic,
    /// Elastic cross sections for anti-baryons.
    AntiBaryonElastic,
    /// Inelastic cross sections for anti-nucleons and anti-nuclei.
    AntiNucleusInelastic,
    /// Inelastic cross sections for hyperons and anti-hyperons.
    HyperonInelastic,
    /// Inelastic cross sections for nucleons.
    NucleonInelastic,
    /// Elastic cross sections for protons.
    ProtonElastic,
}

impl DatasetKind {
    /// Stable lowercase label used in summaries and error context.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::AntiNucleusElastic => "anti-nucleus-elastic",
            DatasetKind::AntiBaryonElastic => "anti-baryon-elastic",
            DatasetKind::AntiNucleusInelastic => "anti-nucleus-inelastic",
            DatasetKind::HyperonInelastic => "hyperon-inelastic",
            DatasetKind::NucleonInelastic => "nucleon-inelastic",
            DatasetKind::ProtonElastic => "proton-elastic",
        }
    }
}

/// Handle to one toolkit cross-section dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossSectionSet {
    kind: DatasetKind,
}

impl CrossSectionSet {
    /// Creates a dataset handle.
    pub fn new(kind: DatasetKind) -> Self {
        Self { kind }
    }

    /// The dataset's identity.
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }
}
