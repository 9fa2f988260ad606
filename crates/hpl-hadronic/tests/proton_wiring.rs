use std::sync::Arc;

use hpl_core::models::{DatasetKind, ModelKind};
use hpl_core::process::{ParticleRegistry, ProcessKind};
use hpl_core::species::Species;

use hpl_hadronic::constructor::PhysicsConstructor;
use hpl_hadronic::proton::{ProtonPhysics, CASCADE_MAX, GENERATOR_MAX, GENERATOR_MIN};

fn built_registry() -> (ProtonPhysics, ParticleRegistry) {
    let mut physics = ProtonPhysics::new();
    let mut registry = ParticleRegistry::new();
    physics.construct_processes(&mut registry).unwrap();
    (physics, registry)
}

#[test]
fn proton_gets_one_elastic_one_inelastic_and_no_rest_process() {
    let (_physics, registry) = built_registry();
    assert_eq!(registry.len(), 1);
    let manager = registry.manager(Species::Proton).unwrap();
    assert_eq!(manager.count_discrete(ProcessKind::Elastic), 1);
    assert_eq!(manager.count_discrete(ProcessKind::Inelastic), 1);
    assert!(manager.rest_processes().is_empty());
}

#[test]
fn elastic_process_carries_the_parameterized_model_and_proton_dataset() {
    let (_physics, registry) = built_registry();
    let elastic = registry
        .manager(Species::Proton)
        .and_then(|m| m.find_discrete(ProcessKind::Elastic))
        .unwrap();
    assert_eq!(elastic.models().len(), 1);
    assert_eq!(elastic.models()[0].kind(), ModelKind::ParameterizedElastic);
    assert_eq!(elastic.datasets().len(), 1);
    assert_eq!(elastic.datasets()[0].kind(), DatasetKind::ProtonElastic);
}

#[test]
fn inelastic_process_orders_the_cascade_before_the_generator() {
    let (physics, registry) = built_registry();
    let inelastic = registry
        .manager(Species::Proton)
        .and_then(|m| m.find_discrete(ProcessKind::Inelastic))
        .unwrap();
    assert_eq!(inelastic.models().len(), 2);

    let cascade = &inelastic.models()[0];
    assert_eq!(cascade.kind(), ModelKind::IntranuclearCascade);
    assert_eq!(cascade.min_energy(), 0.0);
    assert_eq!(cascade.max_energy(), CASCADE_MAX);

    let generator = &inelastic.models()[1];
    assert_eq!(generator.kind(), ModelKind::HighEnergyGenerator);
    assert_eq!(generator.min_energy(), GENERATOR_MIN);
    assert_eq!(generator.max_energy(), GENERATOR_MAX);
    assert!(
        Arc::ptr_eq(generator, &physics.generator_complex().unwrap().generator()),
        "inelastic process must reference the shared generator"
    );

    // Cascade and generator validity overlap between 5 and 12 GeV; the
    // cascade wins there because it registered first.
    assert!(cascade.max_energy() > generator.min_energy());

    assert_eq!(inelastic.datasets().len(), 1);
    assert_eq!(inelastic.datasets()[0].kind(), DatasetKind::NucleonInelastic);
}

#[test]
fn double_build_fails_with_the_family_in_context() {
    let (mut physics, mut registry) = built_registry();
    let err = physics.construct_processes(&mut registry).unwrap_err();
    assert_eq!(err.info().code, "double-build");
    assert_eq!(err.info().context.get("family").unwrap(), "proton");
    let manager = registry.manager(Species::Proton).unwrap();
    assert_eq!(manager.discrete_processes().len(), 2);
}
