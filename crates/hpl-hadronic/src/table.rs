//! Declarative wiring tables.
//!
//! Each family is an ordered sequence of [`ParticleWiring`] records
//! consumed by the generic registration routine. Row order is registration
//! order; within a row, model sets list low-energy models first so the
//! toolkit's first-registered-wins selection resolves range overlaps.

use serde::{Deserialize, Serialize};

use hpl_core::species::Species;

/// Which elastic model handles a particle's elastic process carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElasticModels {
    /// One general-purpose elastic model over all energies.
    AllEnergy,
    /// A low-energy elastic model followed by the anti-nucleus elastic
    /// model above the split energy.
    LowHighSplit,
    /// One parameterized nucleon elastic model.
    Parameterized,
}

/// Which inelastic model chain a particle's inelastic process carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InelasticModels {
    /// The shared high-energy generator only.
    HighEnergyOnly,
    /// The intranuclear cascade followed by the shared high-energy
    /// generator.
    CascadeThenHighEnergy,
}

/// Which shared elastic dataset instance the elastic process uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElasticXs {
    /// The anti-nucleus elastic dataset shared by light anti-nuclei and
    /// the anti-proton.
    LightAntiNucleus,
    /// The anti-neutron's own anti-nucleus elastic dataset instance.
    AntiNucleusComponent,
    /// The anti-baryon elastic dataset shared by anti-hyperons.
    AntiBaryon,
    /// The proton elastic dataset.
    Proton,
}

/// Which shared inelastic dataset instance the inelastic process uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InelasticXs {
    /// The anti-nucleus inelastic dataset shared by anti-nucleons and
    /// anti-nuclei.
    AntiNucleus,
    /// The hyperon inelastic dataset shared by anti-hyperons.
    Hyperon,
    /// The nucleon inelastic dataset.
    Nucleon,
}

/// One row of a family wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleWiring {
    /// The configured species.
    pub species: Species,
    /// Elastic model set.
    pub elastic: ElasticModels,
    /// Elastic dataset assignment.
    pub elastic_xs: ElasticXs,
    /// Inelastic model chain.
    pub inelastic: InelasticModels,
    /// Inelastic dataset assignment.
    pub inelastic_xs: InelasticXs,
    /// Whether a nuclear-capture process is registered for the particle
    /// coming to rest.
    pub capture_at_rest: bool,
}

/// Anti-baryon family wiring, in registration order.
pub const ANTI_BARYON_TABLE: [ParticleWiring; 12] = [
    ParticleWiring {
        species: Species::AntiProton,
        elastic: ElasticModels::LowHighSplit,
        elastic_xs: ElasticXs::LightAntiNucleus,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::AntiNucleus,
        capture_at_rest: true,
    },
    ParticleWiring {
        species: Species::AntiNeutron,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiNucleusComponent,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::AntiNucleus,
        capture_at_rest: false,
    },
    ParticleWiring {
        species: Species::AntiDeuteron,
        elastic: ElasticModels::LowHighSplit,
        elastic_xs: ElasticXs::LightAntiNucleus,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::AntiNucleus,
        capture_at_rest: true,
    },
    ParticleWiring {
        species: Species::AntiTriton,
        elastic: ElasticModels::LowHighSplit,
        elastic_xs: ElasticXs::LightAntiNucleus,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::AntiNucleus,
        capture_at_rest: true,
    },
    ParticleWiring {
        species: Species::AntiHelium3,
        elastic: ElasticModels::LowHighSplit,
        elastic_xs: ElasticXs::LightAntiNucleus,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::AntiNucleus,
        capture_at_rest: true,
    },
    ParticleWiring {
        species: Species::AntiAlpha,
        elastic: ElasticModels::LowHighSplit,
        elastic_xs: ElasticXs::LightAntiNucleus,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::AntiNucleus,
        capture_at_rest: true,
    },
    ParticleWiring {
        species: Species::AntiLambda,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiBaryon,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::Hyperon,
        capture_at_rest: false,
    },
    ParticleWiring {
        species: Species::AntiSigmaPlus,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiBaryon,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::Hyperon,
        capture_at_rest: true,
    },
    ParticleWiring {
        species: Species::AntiSigmaMinus,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiBaryon,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::Hyperon,
        capture_at_rest: false,
    },
    ParticleWiring {
        species: Species::AntiXiZero,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiBaryon,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::Hyperon,
        capture_at_rest: false,
    },
    ParticleWiring {
        species: Species::AntiXiMinus,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiBaryon,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::Hyperon,
        capture_at_rest: false,
    },
    ParticleWiring {
        species: Species::AntiOmegaMinus,
        elastic: ElasticModels::AllEnergy,
        elastic_xs: ElasticXs::AntiBaryon,
        inelastic: InelasticModels::HighEnergyOnly,
        inelastic_xs: InelasticXs::Hyperon,
        capture_at_rest: false,
    },
];

/// Proton family wiring.
pub const PROTON_TABLE: [ParticleWiring; 1] = [ParticleWiring {
    species: Species::Proton,
    elastic: ElasticModels::Parameterized,
    elastic_xs: ElasticXs::Proton,
    inelastic: InelasticModels::CascadeThenHighEnergy,
    inelastic_xs: InelasticXs::Nucleon,
    capture_at_rest: false,
}];
