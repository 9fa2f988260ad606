//! Run configuration for the primary generator adapter.
//!
//! The selector is three independent booleans, matching the host run
//! configuration layer; exactly one must be true. Everything else is
//! per-source kinematics with field-level defaults so a minimal YAML
//! document stays minimal.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use hpl_core::errors::{ErrorInfo, HplError};
use hpl_core::units::{GEV, MEV};

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Select the fixed-kinematics particle gun.
    #[serde(default)]
    pub use_particle_gun: bool,
    /// Select the sampling particle source.
    #[serde(default)]
    pub use_particle_source: bool,
    /// Select the external event-stream reader. Requires the `hepmc3`
    /// feature at build time.
    #[serde(default)]
    pub use_event_reader: bool,
    /// Particle gun kinematics.
    #[serde(default)]
    pub gun: GunConfig,
    /// Particle source sampling ranges.
    #[serde(default)]
    pub source: SourceConfig,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            use_particle_gun: true,
            use_particle_source: false,
            use_event_reader: false,
            gun: GunConfig::default(),
            source: SourceConfig::default(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Checks the selector invariant: exactly one source flag is true,
    /// and the selected source is available in this build.
    pub fn validate(&self) -> Result<(), HplError> {
        let selected = self.selected_flags();
        if selected.len() != 1 {
            let listed = if selected.is_empty() {
                "none".to_string()
            } else {
                selected.join(",")
            };
            return Err(HplError::Config(
                ErrorInfo::new(
                    "source-selection",
                    "exactly one primary source must be selected",
                )
                .with_context("selected", listed)
                .with_hint(
                    "set exactly one of use_particle_gun, use_particle_source, use_event_reader",
                ),
            ));
        }
        #[cfg(not(feature = "hepmc3"))]
        if self.use_event_reader {
            return Err(HplError::Config(
                ErrorInfo::new(
                    "reader-unavailable",
                    "event reader support is not compiled in",
                )
                .with_hint("rebuild with the hepmc3 feature enabled"),
            ));
        }
        Ok(())
    }

    /// Names of the selector flags currently set, in declaration order.
    pub fn selected_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.use_particle_gun {
            flags.push("use_particle_gun");
        }
        if self.use_particle_source {
            flags.push("use_particle_source");
        }
        if self.use_event_reader {
            flags.push("use_event_reader");
        }
        flags
    }

    /// Parses a configuration from a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, HplError> {
        serde_yaml::from_str(text).map_err(|err| {
            HplError::Serde(ErrorInfo::new("config-yaml", err.to_string()))
        })
    }

    /// Reads and parses a configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, HplError> {
        let text = fs::read_to_string(path).map_err(|err| {
            HplError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }
}

/// Fixed kinematics for the particle gun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunConfig {
    /// PDG code of the fired particle.
    #[serde(default = "default_gun_pdg")]
    pub pdg: i64,
    /// Momentum vector (px, py, pz) in MeV/c.
    #[serde(default = "default_gun_momentum")]
    pub momentum: [f64; 3],
    /// Vertex position (x, y, z) in mm.
    #[serde(default)]
    pub position: [f64; 3],
    /// Vertex time in ns.
    #[serde(default)]
    pub time: f64,
}

fn default_gun_pdg() -> i64 {
    2212
}

fn default_gun_momentum() -> [f64; 3] {
    [0.0, 0.0, 1.0 * GEV]
}

impl Default for GunConfig {
    fn default() -> Self {
        Self {
            pdg: default_gun_pdg(),
            momentum: default_gun_momentum(),
            position: [0.0; 3],
            time: 0.0,
        }
    }
}

/// Sampling ranges for the general particle source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// PDG code of the sampled particle.
    #[serde(default = "default_source_pdg")]
    pub pdg: i64,
    /// Lower bound of the sampled momentum magnitude in MeV/c.
    #[serde(default = "default_energy_min")]
    pub energy_min: f64,
    /// Upper bound of the sampled momentum magnitude in MeV/c.
    #[serde(default = "default_energy_max")]
    pub energy_max: f64,
    /// Half-widths (x, y, z) in mm of the vertex sampling box, centred on
    /// the origin. Zero pins that axis.
    #[serde(default)]
    pub half_extent: [f64; 3],
    /// Vertex time in ns.
    #[serde(default)]
    pub time: f64,
}

fn default_source_pdg() -> i64 {
    2212
}

fn default_energy_min() -> f64 {
    100.0 * MEV
}

fn default_energy_max() -> f64 {
    10.0 * GEV
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            pdg: default_source_pdg(),
            energy_min: default_energy_min(),
            energy_max: default_energy_max(),
            half_extent: [0.0; 3],
            time: 0.0,
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed for the run; per-event substreams derive from it.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_master_seed() -> u64 {
    0x5EED_BA5E_CAFE_F00D_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
        }
    }
}
