//! Proton family constructor.
//!
//! The proton gets one parameterized elastic process and one inelastic
//! process whose model chain hands low energies to an intranuclear
//! cascade and everything above the overlap window to the high-energy
//! generator.

use std::sync::Arc;

use hpl_core::errors::HplError;
use hpl_core::models::{CrossSectionSet, DatasetKind, InteractionModel, ModelKind};
use hpl_core::process::ParticleRegistry;
use hpl_core::units::{EnergyRange, GEV, TEV};

use crate::complex::GeneratorComplex;
use crate::constructor::{already_built, unavailable, ModelBank, PhysicsConstructor};
use crate::table::{ElasticModels, ElasticXs, InelasticModels, InelasticXs, PROTON_TABLE};

/// Upper validity bound of the intranuclear cascade.
pub const CASCADE_MAX: f64 = 12.0 * GEV;
/// Lower validity bound of the family's high-energy generator.
pub const GENERATOR_MIN: f64 = 5.0 * GEV;
/// Upper validity bound of the family's high-energy generator.
pub const GENERATOR_MAX: f64 = 100.0 * TEV;

/// Process constructor for the proton family.
#[derive(Debug, Default)]
pub struct ProtonPhysics {
    complex: Option<GeneratorComplex>,
    built: bool,
}

impl ProtonPhysics {
    /// Creates the constructor. No wiring happens until
    /// [`PhysicsConstructor::construct_processes`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared generator complex, present once built.
    pub fn generator_complex(&self) -> Option<&GeneratorComplex> {
        self.complex.as_ref()
    }
}

struct ProtonBank {
    parameterized_elastic: Arc<InteractionModel>,
    cascade: Arc<InteractionModel>,
    generator: Arc<InteractionModel>,
    proton_elastic_xs: Arc<CrossSectionSet>,
    nucleon_inelastic_xs: Arc<CrossSectionSet>,
}

impl ProtonBank {
    fn build(complex: &GeneratorComplex) -> Self {
        let mut cascade = InteractionModel::new(ModelKind::IntranuclearCascade);
        cascade.set_max_energy(CASCADE_MAX);

        Self {
            parameterized_elastic: Arc::new(InteractionModel::new(
                ModelKind::ParameterizedElastic,
            )),
            cascade: Arc::new(cascade),
            generator: complex.generator(),
            proton_elastic_xs: Arc::new(CrossSectionSet::new(DatasetKind::ProtonElastic)),
            nucleon_inelastic_xs: Arc::new(CrossSectionSet::new(DatasetKind::NucleonInelastic)),
        }
    }
}

impl ModelBank for ProtonBank {
    fn family(&self) -> &'static str {
        "proton"
    }

    fn elastic_models(&self, set: ElasticModels) -> Result<Vec<Arc<InteractionModel>>, HplError> {
        match set {
            ElasticModels::Parameterized => Ok(vec![Arc::clone(&self.parameterized_elastic)]),
            ElasticModels::AllEnergy => Err(unavailable(self, "all-energy-elastic")),
            ElasticModels::LowHighSplit => Err(unavailable(self, "low-high-split-elastic")),
        }
    }

    fn inelastic_models(
        &self,
        set: InelasticModels,
    ) -> Result<Vec<Arc<InteractionModel>>, HplError> {
        match set {
            // Cascade first: registration order resolves the 5 to 12 GeV
            // overlap in the cascade's favour.
            InelasticModels::CascadeThenHighEnergy => Ok(vec![
                Arc::clone(&self.cascade),
                Arc::clone(&self.generator),
            ]),
            InelasticModels::HighEnergyOnly => Err(unavailable(self, "high-energy-only")),
        }
    }

    fn elastic_dataset(&self, xs: ElasticXs) -> Result<Arc<CrossSectionSet>, HplError> {
        match xs {
            ElasticXs::Proton => Ok(Arc::clone(&self.proton_elastic_xs)),
            ElasticXs::LightAntiNucleus => Err(unavailable(self, "light-anti-nucleus-xs")),
            ElasticXs::AntiNucleusComponent => Err(unavailable(self, "anti-nucleus-component-xs")),
            ElasticXs::AntiBaryon => Err(unavailable(self, "anti-baryon-elastic-xs")),
        }
    }

    fn inelastic_dataset(&self, xs: InelasticXs) -> Result<Arc<CrossSectionSet>, HplError> {
        match xs {
            InelasticXs::Nucleon => Ok(Arc::clone(&self.nucleon_inelastic_xs)),
            InelasticXs::AntiNucleus => Err(unavailable(self, "anti-nucleus-inelastic-xs")),
            InelasticXs::Hyperon => Err(unavailable(self, "hyperon-inelastic-xs")),
        }
    }

    fn capture_model(&self) -> Arc<InteractionModel> {
        // No proton row is capturable; the routine never asks for this.
        Arc::new(InteractionModel::new(ModelKind::NuclearCaptureAtRest))
    }
}

impl PhysicsConstructor for ProtonPhysics {
    fn construct_processes(&mut self, registry: &mut ParticleRegistry) -> Result<(), HplError> {
        if self.built {
            return Err(already_built("proton"));
        }
        let complex = GeneratorComplex::new(EnergyRange::new(GENERATOR_MIN, GENERATOR_MAX)?);
        let bank = ProtonBank::build(&complex);
        crate::constructor::wire_particles(registry, &PROTON_TABLE, &bank)?;
        self.complex = Some(complex);
        self.built = true;
        Ok(())
    }

    fn terminate_worker(&mut self) {
        self.complex = None;
    }
}
