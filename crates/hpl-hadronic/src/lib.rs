#![deny(missing_docs)]

//! Hadronic process constructors for the anti-baryon and proton families.
//!
//! Each family is a declarative wiring table consumed by one generic
//! registration routine; the constructors build the shared models (elastic
//! sets, cross-section datasets, and one high-energy generator complex per
//! family) and register elastic, inelastic, and at-rest processes against
//! a worker-owned particle registry.

/// Anti-baryon family constructor.
pub mod anti_baryon;
/// The shared high-energy generator complex.
pub mod complex;
/// Two-phase constructor contract and the generic registration routine.
pub mod constructor;
/// Proton family constructor.
pub mod proton;
/// Serializable wiring summaries.
pub mod report;
/// Declarative wiring tables.
pub mod table;

pub use anti_baryon::AntiBaryonPhysics;
pub use complex::GeneratorComplex;
pub use constructor::{wire_particles, ModelBank, PhysicsConstructor};
pub use proton::ProtonPhysics;
pub use report::{ProcessSummary, SpeciesSummary, WiringSummary};
pub use table::{ParticleWiring, ANTI_BARYON_TABLE, PROTON_TABLE};
