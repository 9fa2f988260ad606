//! General particle source sampling kinematics per event.

use rand::Rng;

use hpl_core::errors::{ErrorInfo, HplError};
use hpl_core::event::{Event, PrimaryParticle, PrimaryVertex};
use hpl_core::rng::RngHandle;

use crate::config::{SeedPolicy, SourceConfig};

/// Samples one primary per event: momentum magnitude uniform in the
/// configured band, direction isotropic, vertex uniform in the sampling
/// box. Each event draws from its own seed substream, so regenerating an
/// event id reproduces its primaries exactly.
#[derive(Debug, Clone)]
pub struct ParticleSource {
    config: SourceConfig,
    master_seed: u64,
}

impl ParticleSource {
    /// Creates a source after validating its sampling ranges.
    pub fn new(config: SourceConfig, seeds: &SeedPolicy) -> Result<Self, HplError> {
        if !config.energy_min.is_finite()
            || !config.energy_max.is_finite()
            || config.energy_min <= 0.0
            || config.energy_max <= config.energy_min
        {
            return Err(HplError::Config(
                ErrorInfo::new(
                    "source-energy-band",
                    "source momentum band must be finite with 0 < min < max",
                )
                .with_context("energy_min", config.energy_min.to_string())
                .with_context("energy_max", config.energy_max.to_string()),
            ));
        }
        if !config.half_extent.iter().all(|h| h.is_finite() && *h >= 0.0) {
            return Err(HplError::Config(
                ErrorInfo::new(
                    "source-extent",
                    "sampling box half-widths must be finite and >= 0",
                ),
            ));
        }
        Ok(Self {
            config,
            master_seed: seeds.master_seed,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Appends one sampled vertex to the event.
    pub fn generate_primaries(&self, event: &mut Event) -> Result<(), HplError> {
        let mut rng = RngHandle::for_event(self.master_seed, event.id);

        let magnitude = rng.gen_range(self.config.energy_min..=self.config.energy_max);
        let cos_theta: f64 = rng.gen_range(-1.0..=1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let phi = rng.gen_range(0.0..std::f64::consts::TAU);
        let momentum = [
            magnitude * sin_theta * phi.cos(),
            magnitude * sin_theta * phi.sin(),
            magnitude * cos_theta,
        ];

        let mut position = [0.0; 3];
        for (axis, half) in position.iter_mut().zip(self.config.half_extent) {
            if half > 0.0 {
                *axis = rng.gen_range(-half..=half);
            }
        }

        let mut vertex = PrimaryVertex::new(position, self.config.time);
        vertex.add_particle(PrimaryParticle::new(self.config.pdg, momentum)?);
        event.add_primary_vertex(vertex);
        Ok(())
    }
}
