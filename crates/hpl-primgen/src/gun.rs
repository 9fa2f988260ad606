//! Fixed-kinematics particle gun.

use hpl_core::errors::{ErrorInfo, HplError};
use hpl_core::event::{Event, PrimaryParticle, PrimaryVertex};

use crate::config::GunConfig;

/// Fires the same particle with the same kinematics into every event.
#[derive(Debug, Clone)]
pub struct ParticleGun {
    config: GunConfig,
}

impl ParticleGun {
    /// Creates a gun after validating its kinematics. The momentum must be
    /// finite and non-zero; a gun that fires nothing is a configuration
    /// error, not an empty event.
    pub fn new(config: GunConfig) -> Result<Self, HplError> {
        if !config.momentum.iter().all(|c| c.is_finite())
            || config.momentum.iter().all(|c| *c == 0.0)
        {
            return Err(HplError::Config(
                ErrorInfo::new("gun-momentum", "gun momentum must be finite and non-zero")
                    .with_context("pdg", config.pdg.to_string()),
            ));
        }
        if !config.position.iter().all(|c| c.is_finite()) || !config.time.is_finite() {
            return Err(HplError::Config(
                ErrorInfo::new("gun-vertex", "gun vertex position and time must be finite")
                    .with_context("pdg", config.pdg.to_string()),
            ));
        }
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &GunConfig {
        &self.config
    }

    /// Appends one vertex holding the configured particle.
    pub fn generate_primaries(&self, event: &mut Event) -> Result<(), HplError> {
        let mut vertex = PrimaryVertex::new(self.config.position, self.config.time);
        vertex.add_particle(PrimaryParticle::new(self.config.pdg, self.config.momentum)?);
        event.add_primary_vertex(vertex);
        Ok(())
    }
}
