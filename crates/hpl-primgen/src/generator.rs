//! The primary generator action: one active source per run.

use serde::{Deserialize, Serialize};

use hpl_core::errors::{ErrorInfo, HplError};
use hpl_core::event::Event;

use crate::config::GeneratorConfig;
use crate::gun::ParticleGun;
use crate::source::ParticleSource;

#[cfg(feature = "hepmc3")]
use crate::reader::{EventReader, EventStream};

/// Which source a generator action ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Fixed-kinematics particle gun.
    ParticleGun,
    /// Sampling particle source.
    ParticleSource,
    /// External event-stream reader.
    EventReader,
}

/// Exactly one source exists per action; the enum makes the invariant
/// structural instead of three nullable fields.
#[derive(Debug)]
enum ActiveSource {
    Gun(ParticleGun),
    Source(ParticleSource),
    #[cfg(feature = "hepmc3")]
    Reader(EventReader),
}

/// Owns the single active primary source and forwards every
/// generate-primaries request to it.
#[derive(Debug)]
pub struct PrimaryGeneratorAction {
    source: ActiveSource,
}

impl PrimaryGeneratorAction {
    /// Builds the action from a validated configuration. Selecting the
    /// event reader here is an error even with reader support compiled
    /// in, since the reader needs a host-supplied stream; use
    /// [`PrimaryGeneratorAction::with_stream`] for that.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, HplError> {
        config.validate()?;
        if config.use_particle_gun {
            return Ok(Self {
                source: ActiveSource::Gun(ParticleGun::new(config.gun.clone())?),
            });
        }
        if config.use_particle_source {
            return Ok(Self {
                source: ActiveSource::Source(ParticleSource::new(
                    config.source.clone(),
                    &config.seed_policy,
                )?),
            });
        }
        Err(HplError::Config(
            ErrorInfo::new(
                "reader-needs-stream",
                "the event reader requires an externally supplied stream",
            )
            .with_hint("construct the action with with_stream"),
        ))
    }

    /// Builds the action around a host-supplied event stream. The
    /// configuration must select the reader.
    #[cfg(feature = "hepmc3")]
    pub fn with_stream(
        config: &GeneratorConfig,
        stream: Box<dyn EventStream>,
    ) -> Result<Self, HplError> {
        config.validate()?;
        if !config.use_event_reader {
            return Err(HplError::Config(
                ErrorInfo::new(
                    "stream-unused",
                    "a stream was supplied but the event reader is not selected",
                )
                .with_context("selected", config.selected_flags().join(",")),
            ));
        }
        Ok(Self {
            source: ActiveSource::Reader(EventReader::new(stream)),
        })
    }

    /// The kind of the active source.
    pub fn source_kind(&self) -> SourceKind {
        match &self.source {
            ActiveSource::Gun(_) => SourceKind::ParticleGun,
            ActiveSource::Source(_) => SourceKind::ParticleSource,
            #[cfg(feature = "hepmc3")]
            ActiveSource::Reader(_) => SourceKind::EventReader,
        }
    }

    /// Delegates population of the event's primary vertices to the active
    /// source.
    pub fn generate_primaries(&mut self, event: &mut Event) -> Result<(), HplError> {
        match &mut self.source {
            ActiveSource::Gun(gun) => gun.generate_primaries(event),
            ActiveSource::Source(source) => source.generate_primaries(event),
            #[cfg(feature = "hepmc3")]
            ActiveSource::Reader(reader) => reader.generate_primaries(event),
        }
    }
}
