#![deny(missing_docs)]

//! Primary-event generation adapter.
//!
//! Three mutually exclusive sources (particle gun, general particle
//! source, and an external event-stream reader behind the `hepmc3`
//! feature) selected by run-configuration flags; exactly one source is
//! active per run and every generate-primaries request goes to it.

/// YAML configuration schema, defaults, and selector validation.
pub mod config;
/// The primary generator action owning the active source.
pub mod generator;
/// Fixed-kinematics particle gun.
pub mod gun;
/// External event-stream reader.
#[cfg(feature = "hepmc3")]
pub mod reader;
/// General particle source sampling kinematics per event.
pub mod source;

pub use config::{GeneratorConfig, GunConfig, SeedPolicy, SourceConfig};
pub use generator::{PrimaryGeneratorAction, SourceKind};
pub use gun::ParticleGun;
#[cfg(feature = "hepmc3")]
pub use reader::{EventReader, EventRecord, EventStream, InMemoryStream};
pub use source::ParticleSource;
