use std::sync::Arc;

use hpl_core::models::{DatasetKind, ModelKind};
use hpl_core::process::{ParticleRegistry, ProcessKind};
use hpl_core::species::Species;
use hpl_core::units::TEV;

use hpl_hadronic::anti_baryon::{
    AntiBaryonPhysics, ANTI_NUCLEUS_ELASTIC_MIN, GENERATOR_MAX, LOW_ELASTIC_MAX,
};
use hpl_hadronic::constructor::PhysicsConstructor;
use hpl_hadronic::report::WiringSummary;
use hpl_hadronic::table::ANTI_BARYON_TABLE;

fn built_registry() -> (AntiBaryonPhysics, ParticleRegistry) {
    let mut physics = AntiBaryonPhysics::new();
    let mut registry = ParticleRegistry::new();
    physics.construct_processes(&mut registry).unwrap();
    (physics, registry)
}

#[test]
fn every_species_gets_one_elastic_and_one_inelastic() {
    let (_physics, registry) = built_registry();
    assert_eq!(registry.len(), ANTI_BARYON_TABLE.len());
    for row in ANTI_BARYON_TABLE {
        let manager = registry.manager(row.species).unwrap();
        assert_eq!(
            manager.count_discrete(ProcessKind::Elastic),
            1,
            "{}",
            row.species.label()
        );
        assert_eq!(
            manager.count_discrete(ProcessKind::Inelastic),
            1,
            "{}",
            row.species.label()
        );
    }
}

#[test]
fn at_rest_capture_covers_exactly_the_stoppable_six() {
    let (_physics, registry) = built_registry();
    let expected = [
        Species::AntiProton,
        Species::AntiDeuteron,
        Species::AntiTriton,
        Species::AntiHelium3,
        Species::AntiAlpha,
        Species::AntiSigmaPlus,
    ];
    for row in ANTI_BARYON_TABLE {
        let manager = registry.manager(row.species).unwrap();
        let want = usize::from(expected.contains(&row.species));
        assert_eq!(
            manager.rest_processes().len(),
            want,
            "{}",
            row.species.label()
        );
        if want == 1 {
            let capture = &manager.rest_processes()[0];
            assert_eq!(capture.kind(), ProcessKind::CaptureAtRest);
            assert_eq!(
                capture.models()[0].kind(),
                ModelKind::NuclearCaptureAtRest
            );
        }
    }
}

#[test]
fn split_elastic_rows_register_the_low_energy_model_first() {
    let (_physics, registry) = built_registry();
    let split = [
        Species::AntiProton,
        Species::AntiDeuteron,
        Species::AntiTriton,
        Species::AntiHelium3,
        Species::AntiAlpha,
    ];
    for species in split {
        let elastic = registry
            .manager(species)
            .and_then(|m| m.find_discrete(ProcessKind::Elastic))
            .unwrap();
        assert_eq!(elastic.models().len(), 2, "{}", species.label());
        let low = &elastic.models()[0];
        let high = &elastic.models()[1];
        assert_eq!(low.kind(), ModelKind::HadronElastic);
        assert_eq!(low.max_energy(), LOW_ELASTIC_MAX);
        assert_eq!(high.kind(), ModelKind::AntiNucleusElastic);
        assert_eq!(high.min_energy(), ANTI_NUCLEUS_ELASTIC_MIN);
        // The seam is covered: the low model reaches past the high
        // model's floor.
        assert!(low.max_energy() > high.min_energy());
    }

    let all_energy = [
        Species::AntiNeutron,
        Species::AntiLambda,
        Species::AntiSigmaPlus,
        Species::AntiSigmaMinus,
        Species::AntiXiZero,
        Species::AntiXiMinus,
        Species::AntiOmegaMinus,
    ];
    for species in all_energy {
        let elastic = registry
            .manager(species)
            .and_then(|m| m.find_discrete(ProcessKind::Elastic))
            .unwrap();
        assert_eq!(elastic.models().len(), 1, "{}", species.label());
        assert_eq!(elastic.models()[0].kind(), ModelKind::HadronElastic);
        assert_eq!(elastic.models()[0].min_energy(), 0.0);
        assert_eq!(elastic.models()[0].max_energy(), 100.0 * TEV);
    }
}

#[test]
fn all_inelastic_processes_share_one_generator_from_zero_to_100_tev() {
    let (physics, registry) = built_registry();
    let generator = physics.generator_complex().unwrap().generator();
    assert_eq!(generator.kind(), ModelKind::HighEnergyGenerator);
    assert_eq!(generator.min_energy(), 0.0);
    assert_eq!(generator.max_energy(), GENERATOR_MAX);

    for row in ANTI_BARYON_TABLE {
        let inelastic = registry
            .manager(row.species)
            .and_then(|m| m.find_discrete(ProcessKind::Inelastic))
            .unwrap();
        assert_eq!(inelastic.models().len(), 1, "{}", row.species.label());
        assert!(
            Arc::ptr_eq(&inelastic.models()[0], &generator),
            "{} does not share the family generator",
            row.species.label()
        );
    }
}

#[test]
fn dataset_sharing_matches_the_family_assignment() {
    let (_physics, registry) = built_registry();
    let elastic_xs = |species: Species| {
        registry
            .manager(species)
            .and_then(|m| m.find_discrete(ProcessKind::Elastic))
            .map(|p| Arc::clone(&p.datasets()[0]))
            .unwrap()
    };
    let inelastic_xs = |species: Species| {
        registry
            .manager(species)
            .and_then(|m| m.find_discrete(ProcessKind::Inelastic))
            .map(|p| Arc::clone(&p.datasets()[0]))
            .unwrap()
    };

    // Light anti-nuclei and the anti-proton share one elastic dataset
    // instance; the anti-neutron has its own instance of the same kind.
    let shared = elastic_xs(Species::AntiProton);
    for species in [
        Species::AntiDeuteron,
        Species::AntiTriton,
        Species::AntiHelium3,
        Species::AntiAlpha,
    ] {
        assert!(Arc::ptr_eq(&elastic_xs(species), &shared), "{}", species.label());
    }
    let anti_neutron = elastic_xs(Species::AntiNeutron);
    assert_eq!(anti_neutron.kind(), DatasetKind::AntiNucleusElastic);
    assert_eq!(shared.kind(), DatasetKind::AntiNucleusElastic);
    assert!(!Arc::ptr_eq(&anti_neutron, &shared));

    // Anti-hyperons share the anti-baryon elastic dataset.
    let hyperon_elastic = elastic_xs(Species::AntiLambda);
    assert_eq!(hyperon_elastic.kind(), DatasetKind::AntiBaryonElastic);
    for species in [
        Species::AntiSigmaPlus,
        Species::AntiSigmaMinus,
        Species::AntiXiZero,
        Species::AntiXiMinus,
        Species::AntiOmegaMinus,
    ] {
        assert!(
            Arc::ptr_eq(&elastic_xs(species), &hyperon_elastic),
            "{}",
            species.label()
        );
    }

    // One inelastic dataset per physics group.
    let nucleus = inelastic_xs(Species::AntiProton);
    assert_eq!(nucleus.kind(), DatasetKind::AntiNucleusInelastic);
    for species in [
        Species::AntiNeutron,
        Species::AntiDeuteron,
        Species::AntiTriton,
        Species::AntiHelium3,
        Species::AntiAlpha,
    ] {
        assert!(Arc::ptr_eq(&inelastic_xs(species), &nucleus), "{}", species.label());
    }
    let hyperon = inelastic_xs(Species::AntiLambda);
    assert_eq!(hyperon.kind(), DatasetKind::HyperonInelastic);
    for species in [
        Species::AntiSigmaPlus,
        Species::AntiSigmaMinus,
        Species::AntiXiZero,
        Species::AntiXiMinus,
        Species::AntiOmegaMinus,
    ] {
        assert!(Arc::ptr_eq(&inelastic_xs(species), &hyperon), "{}", species.label());
    }
}

#[test]
fn double_build_fails_and_leaves_the_registry_untouched() {
    let (mut physics, mut registry) = built_registry();
    let before = WiringSummary::from_registry(&registry);
    let err = physics.construct_processes(&mut registry).unwrap_err();
    assert_eq!(err.info().code, "double-build");
    assert_eq!(err.info().context.get("family").unwrap(), "anti-baryon");
    assert_eq!(WiringSummary::from_registry(&registry), before);
}

#[test]
fn teardown_leaves_registered_processes_intact() {
    let (mut physics, registry) = built_registry();
    physics.terminate_worker();
    assert!(physics.generator_complex().is_none());
    drop(physics);

    let inelastic = registry
        .manager(Species::AntiOmegaMinus)
        .and_then(|m| m.find_discrete(ProcessKind::Inelastic))
        .unwrap();
    assert_eq!(inelastic.models()[0].kind(), ModelKind::HighEnergyGenerator);
    assert_eq!(inelastic.models()[0].max_energy(), 100.0 * TEV);
}
