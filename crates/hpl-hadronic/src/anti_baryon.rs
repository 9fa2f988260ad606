//! Anti-baryon family constructor.
//!
//! Configures elastic, inelastic, and (for stoppable anti-particles)
//! at-rest capture processes for anti-nucleons, light anti-nuclei, and
//! anti-hyperons. All inelastic processes share one high-energy generator
//! valid from zero to 100 TeV.

use std::sync::Arc;

use hpl_core::errors::HplError;
use hpl_core::models::{CrossSectionSet, DatasetKind, InteractionModel, ModelKind};
use hpl_core::process::ParticleRegistry;
use hpl_core::units::{EnergyRange, MEV, TEV};

use crate::complex::GeneratorComplex;
use crate::constructor::{already_built, unavailable, ModelBank, PhysicsConstructor};
use crate::table::{ElasticModels, ElasticXs, InelasticModels, InelasticXs, ANTI_BARYON_TABLE};

/// Upper validity bound of the low-energy elastic model. Slightly above
/// the anti-nucleus model's floor so the toolkit's first-registered-wins
/// selection covers the seam.
pub const LOW_ELASTIC_MAX: f64 = 100.1 * MEV;
/// Lower validity bound of the anti-nucleus elastic model.
pub const ANTI_NUCLEUS_ELASTIC_MIN: f64 = 100.0 * MEV;
/// Upper validity bound of the family's high-energy generator.
pub const GENERATOR_MAX: f64 = 100.0 * TEV;

/// Process constructor for the anti-baryon family.
#[derive(Debug, Default)]
pub struct AntiBaryonPhysics {
    complex: Option<GeneratorComplex>,
    built: bool,
}

impl AntiBaryonPhysics {
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

struct AntiBaryonBank {
    all_energy_elastic: Arc<InteractionModel>,
    low_energy_elastic: Arc<InteractionModel>,
    anti_nucleus_elastic: Arc<InteractionModel>,
    generator: Arc<InteractionModel>,
    light_elastic_xs: Arc<CrossSectionSet>,
    anti_neutron_elastic_xs: Arc<CrossSectionSet>,
    anti_baryon_elastic_xs: Arc<CrossSectionSet>,
    anti_nucleus_inelastic_xs: Arc<CrossSectionSet>,
    hyperon_inelastic_xs: Arc<CrossSectionSet>,
}

impl AntiBaryonBank {
    fn build(complex: &GeneratorComplex) -> Self {
        // One elastic model for all anti-hyperon and anti-neutron energies.
        let all_energy_elastic = Arc::new(InteractionModel::new(ModelKind::HadronElastic));

        // Split elastic pair for the anti-proton and light anti-nuclei.
        let mut low = InteractionModel::new(ModelKind::HadronElastic);
        low.set_max_energy(LOW_ELASTIC_MAX);
        let mut anuc = InteractionModel::new(ModelKind::AntiNucleusElastic);
        anuc.set_min_energy(ANTI_NUCLEUS_ELASTIC_MIN);

        Self {
            all_energy_elastic,
            low_energy_elastic: Arc::new(low),
            anti_nucleus_elastic: Arc::new(anuc),
            generator: complex.generator(),
            light_elastic_xs: Arc::new(CrossSectionSet::new(DatasetKind::AntiNucleusElastic)),
            // The anti-neutron carries its own dataset instance of the
            // same kind.
            anti_neutron_elastic_xs: Arc::new(CrossSectionSet::new(
                DatasetKind::AntiNucleusElastic,
            )),
            anti_baryon_elastic_xs: Arc::new(CrossSectionSet::new(DatasetKind::AntiBaryonElastic)),
            anti_nucleus_inelastic_xs: Arc::new(CrossSectionSet::new(
                DatasetKind::AntiNucleusInelastic,
            )),
            hyperon_inelastic_xs: Arc::new(CrossSectionSet::new(DatasetKind::HyperonInelastic)),
        }
    }
}

impl ModelBank for AntiBaryonBank {
    fn family(&self) -> &'static str {
        "anti-baryon"
    }

    fn elastic_models(&self, set: ElasticModels) -> Result<Vec<Arc<InteractionModel>>, HplError> {
        match set {
            ElasticModels::AllEnergy => Ok(vec![Arc::clone(&self.all_energy_elastic)]),
            ElasticModels::LowHighSplit => Ok(vec![
                Arc::clone(&self.low_energy_elastic),
                Arc::clone(&self.anti_nucleus_elastic),
            ]),
            ElasticModels::Parameterized => Err(unavailable(self, "parameterized-elastic")),
        }
    }

    fn inelastic_models(
        &self,
        set: InelasticModels,
    ) -> Result<Vec<Arc<InteractionModel>>, HplError> {
        match set {
            InelasticModels::HighEnergyOnly => Ok(vec![Arc::clone(&self.generator)]),
            InelasticModels::CascadeThenHighEnergy => {
                Err(unavailable(self, "cascade-then-high-energy"))
            }
        }
    }

    fn elastic_dataset(&self, xs: ElasticXs) -> Result<Arc<CrossSectionSet>, HplError> {
        match xs {
            ElasticXs::LightAntiNucleus => Ok(Arc::clone(&self.light_elastic_xs)),
            ElasticXs::AntiNucleusComponent => Ok(Arc::clone(&self.anti_neutron_elastic_xs)),
            ElasticXs::AntiBaryon => Ok(Arc::clone(&self.anti_baryon_elastic_xs)),
            ElasticXs::Proton => Err(unavailable(self, "proton-elastic-xs")),
        }
    }

    fn inelastic_dataset(&self, xs: InelasticXs) -> Result<Arc<CrossSectionSet>, HplError> {
        match xs {
            InelasticXs::AntiNucleus => Ok(Arc::clone(&self.anti_nucleus_inelastic_xs)),
            InelasticXs::Hyperon => Ok(Arc::clone(&self.hyperon_inelastic_xs)),
            InelasticXs::Nucleon => Err(unavailable(self, "nucleon-inelastic-xs")),
        }
    }

    fn capture_model(&self) -> Arc<InteractionModel> {
        Arc::new(InteractionModel::new(ModelKind::NuclearCaptureAtRest))
    }
}

impl PhysicsConstructor for AntiBaryonPhysics {
    fn construct_processes(&mut self, registry: &mut ParticleRegistry) -> Result<(), HplError> {
        if self.built {
            return Err(already_built("anti-baryon"));
        }
        let complex = GeneratorComplex::new(EnergyRange::up_to(GENERATOR_MAX)?);
        let bank = AntiBaryonBank::build(&complex);
        crate::constructor::wire_particles(registry, &ANTI_BARYON_TABLE, &bank)?;
        self.complex = Some(complex);
        self.built = true;
        Ok(())
    }

    fn terminate_worker(&mut self) {
        self.complex = None;
    }
}
