//! The shared high-energy generator complex.
//!
//! One complex exists per family constructor: a string-model generator
//! handle plus the hadronization, fragmentation/decay, and pre-compound
//! transport components it drives. The generator handle is what gets
//! registered on inelastic processes; the components are single-owner
//! fields of the complex.

use std::sync::Arc;

use hpl_core::models::{InteractionModel, ModelKind};
use hpl_core::units::EnergyRange;

/// Lund-style string fragmentation scheme.
#[derive(Debug, Clone, Default)]
pub struct LundFragmentation;

impl LundFragmentation {
    /// Creates the fragmentation scheme.
    pub fn new() -> Self {
        Self
    }

    /// Scheme label reported in diagnostics.
    pub fn scheme(&self) -> &'static str {
        "lund-string"
    }
}

/// Excited-string decay stage; owns the fragmentation scheme it applies.
#[derive(Debug, Clone)]
pub struct StringDecay {
    fragmentation: LundFragmentation,
}

impl StringDecay {
    /// Creates the decay stage around a fragmentation scheme.
    pub fn new(fragmentation: LundFragmentation) -> Self {
        Self { fragmentation }
    }

    /// The fragmentation scheme this stage applies.
    pub fn fragmentation(&self) -> &LundFragmentation {
        &self.fragmentation
    }
}

/// String-model hadronization stage; owns its decay stage.
#[derive(Debug, Clone)]
pub struct StringHadronization {
    decay: StringDecay,
}

impl StringHadronization {
    /// Creates the hadronization stage around a decay stage.
    pub fn new(decay: StringDecay) -> Self {
        Self { decay }
    }

    /// The decay stage driven by this hadronization model.
    pub fn decay(&self) -> &StringDecay {
        &self.decay
    }
}

/// Pre-compound transport interface handing residual nuclei back to the
/// toolkit's de-excitation stage.
#[derive(Debug, Clone, Default)]
pub struct PrecompoundInterface;

impl PrecompoundInterface {
    /// Creates the transport interface.
    pub fn new() -> Self {
        Self
    }
}

/// The coupled generator / hadronization / fragmentation / transport set
/// used for inelastic interactions above threshold.
///
/// Field order fixes the release order: transport, then the hadronization
/// chain (decay stage, then fragmentation scheme), then the generator
/// handle. Handles already cloned onto registered processes stay alive
/// through their reference counts.
#[derive(Debug, Clone)]
pub struct GeneratorComplex {
    transport: PrecompoundInterface,
    hadronization: StringHadronization,
    generator: Arc<InteractionModel>,
}

impl GeneratorComplex {
    /// Builds the complex and sets the generator's validity bounds.
    ///
    /// Construction order mirrors the wiring: the generator drives the
    /// hadronization stage, which applies the fragmentation scheme through
    /// its decay stage; the transport interface is attached last.
    pub fn new(bounds: EnergyRange) -> Self {
        let mut generator = InteractionModel::new(ModelKind::HighEnergyGenerator);
        generator.set_min_energy(bounds.min);
        generator.set_max_energy(bounds.max);
        let hadronization = StringHadronization::new(StringDecay::new(LundFragmentation::new()));
        let transport = PrecompoundInterface::new();
        Self {
            transport,
            hadronization,
            generator: Arc::new(generator),
        }
    }

    /// A shareable handle to the generator, for registration on inelastic
    /// processes. All clones point at the same instance.
    pub fn generator(&self) -> Arc<InteractionModel> {
        Arc::clone(&self.generator)
    }

    /// The generator's validity bounds.
    pub fn bounds(&self) -> EnergyRange {
        self.generator.valid_range()
    }

    /// The hadronization stage.
    pub fn hadronization(&self) -> &StringHadronization {
        &self.hadronization
    }

    /// The pre-compound transport interface.
    pub fn transport(&self) -> &PrecompoundInterface {
        &self.transport
    }
}
