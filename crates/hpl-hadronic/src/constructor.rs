//! Two-phase constructor contract and the generic registration routine.

use std::sync::Arc;

use hpl_core::errors::{ErrorInfo, HplError};
use hpl_core::models::{CrossSectionSet, InteractionModel};
use hpl_core::process::{HadronicProcess, ParticleRegistry, ProcessKind};

use crate::table::{ElasticModels, ElasticXs, InelasticModels, InelasticXs, ParticleWiring};

/// Supplies the shared model and dataset handles a wiring table refers to.
///
/// Each family constructor implements this over the handles it built;
/// selectors the family never uses report a wiring error rather than
/// silently substituting a model.
pub trait ModelBank {
    /// Family label used in error context.
    fn family(&self) -> &'static str;

    /// Elastic model handles for a row, ordered by increasing energy
    /// applicability.
    fn elastic_models(&self, set: ElasticModels) -> Result<Vec<Arc<InteractionModel>>, HplError>;

    /// Inelastic model handles for a row, ordered by increasing energy
    /// applicability.
    fn inelastic_models(&self, set: InelasticModels)
        -> Result<Vec<Arc<InteractionModel>>, HplError>;

    /// The shared elastic dataset instance for a row.
    fn elastic_dataset(&self, xs: ElasticXs) -> Result<Arc<CrossSectionSet>, HplError>;

    /// The shared inelastic dataset instance for a row.
    fn inelastic_dataset(&self, xs: InelasticXs) -> Result<Arc<CrossSectionSet>, HplError>;

    /// A fresh nuclear-capture model handle. One distinct instance is
    /// registered per capturable particle.
    fn capture_model(&self) -> Arc<InteractionModel>;
}

/// Builds the error for a selector the family's bank does not supply.
pub(crate) fn unavailable(bank: &dyn ModelBank, selector: &str) -> HplError {
    HplError::Wiring(
        ErrorInfo::new("bank-selector", "model selector not available in this family")
            .with_context("family", bank.family())
            .with_context("selector", selector),
    )
}

/// Wires every row of a family table into the registry.
///
/// For each row: one elastic and one inelastic discrete process are built,
/// their model and dataset handles attached in table order, and both
/// registered with the species' process manager; rows marked capturable
/// additionally register one at-rest capture process.
pub fn wire_particles(
    registry: &mut ParticleRegistry,
    table: &[ParticleWiring],
    bank: &dyn ModelBank,
) -> Result<(), HplError> {
    for row in table {
        let mut elastic = HadronicProcess::new(ProcessKind::Elastic);
        for model in bank.elastic_models(row.elastic)? {
            elastic.register_model(model);
        }
        elastic.add_dataset(bank.elastic_dataset(row.elastic_xs)?);

        let mut inelastic = HadronicProcess::new(ProcessKind::Inelastic);
        for model in bank.inelastic_models(row.inelastic)? {
            inelastic.register_model(model);
        }
        inelastic.add_dataset(bank.inelastic_dataset(row.inelastic_xs)?);

        let manager = registry.process_manager(row.species);
        manager.add_discrete_process(elastic);
        manager.add_discrete_process(inelastic);

        if row.capture_at_rest {
            let mut capture = HadronicProcess::new(ProcessKind::CaptureAtRest);
            capture.register_model(bank.capture_model());
            manager.add_rest_process(capture);
        }
    }
    Ok(())
}

/// Two-phase physics constructor contract.
///
/// Construction performs no work; the host invokes the build step exactly
/// once per worker, after particle definitions exist. The teardown hook
/// runs on each worker at end of run.
pub trait PhysicsConstructor {
    /// Declares the particles the constructor configures. The species set
    /// is fixed and defined by the host toolkit, so the default is a
    /// no-op.
    fn construct_particles(&mut self, _registry: &mut ParticleRegistry) -> Result<(), HplError> {
        Ok(())
    }

    /// Builds shared models and registers every process the family
    /// defines. A second call is a wiring error and leaves the registry
    /// untouched.
    fn construct_processes(&mut self, registry: &mut ParticleRegistry) -> Result<(), HplError>;

    /// Releases worker-local shared state. Registered processes keep
    /// their handles alive through reference counts.
    fn terminate_worker(&mut self) {}
}

/// Builds the double-build error for a family.
pub(crate) fn already_built(family: &'static str) -> HplError {
    HplError::Wiring(
        ErrorInfo::new("double-build", "construct_processes was already invoked")
            .with_context("family", family)
            .with_hint("each worker builds a family exactly once"),
    )
}
