use hpl_core::event::Event;

use hpl_primgen::config::GeneratorConfig;
use hpl_primgen::generator::{PrimaryGeneratorAction, SourceKind};

fn gun_only() -> GeneratorConfig {
    GeneratorConfig {
        use_particle_gun: true,
        use_particle_source: false,
        use_event_reader: false,
        ..GeneratorConfig::default()
    }
}

#[test]
fn gun_only_config_routes_every_event_through_the_gun() {
    let config = gun_only();
    let mut action = PrimaryGeneratorAction::from_config(&config).unwrap();
    assert_eq!(action.source_kind(), SourceKind::ParticleGun);

    for id in 0..3 {
        let mut event = Event::new(id);
        action.generate_primaries(&mut event).unwrap();
        assert_eq!(event.primary_vertices().len(), 1);
        let vertex = &event.primary_vertices()[0];
        assert_eq!(vertex.particles.len(), 1);
        assert_eq!(vertex.particles[0].pdg, config.gun.pdg);
        assert_eq!(vertex.particles[0].momentum, config.gun.momentum);
    }
}

#[test]
fn source_only_config_activates_the_sampling_source() {
    let config = GeneratorConfig {
        use_particle_gun: false,
        use_particle_source: true,
        ..GeneratorConfig::default()
    };
    let mut action = PrimaryGeneratorAction::from_config(&config).unwrap();
    assert_eq!(action.source_kind(), SourceKind::ParticleSource);

    let mut event = Event::new(0);
    action.generate_primaries(&mut event).unwrap();
    assert_eq!(event.primary_vertices().len(), 1);
}

#[test]
fn multiple_flags_fail_construction_with_the_offenders_listed() {
    let config = GeneratorConfig {
        use_particle_gun: true,
        use_particle_source: true,
        use_event_reader: true,
        ..GeneratorConfig::default()
    };
    let err = PrimaryGeneratorAction::from_config(&config).unwrap_err();
    assert_eq!(err.info().code, "source-selection");
    assert_eq!(
        err.info().context.get("selected").unwrap(),
        "use_particle_gun,use_particle_source,use_event_reader"
    );
}

#[test]
fn no_flags_fail_construction() {
    let config = GeneratorConfig {
        use_particle_gun: false,
        ..GeneratorConfig::default()
    };
    let err = PrimaryGeneratorAction::from_config(&config).unwrap_err();
    assert_eq!(err.info().code, "source-selection");
}

#[cfg(not(feature = "hepmc3"))]
#[test]
fn reader_selection_without_the_feature_is_a_config_error() {
    let config = GeneratorConfig {
        use_particle_gun: false,
        use_event_reader: true,
        ..GeneratorConfig::default()
    };
    let err = PrimaryGeneratorAction::from_config(&config).unwrap_err();
    assert_eq!(err.info().code, "reader-unavailable");
}

#[cfg(feature = "hepmc3")]
#[test]
fn reader_selection_needs_an_external_stream() {
    let config = GeneratorConfig {
        use_particle_gun: false,
        use_event_reader: true,
        ..GeneratorConfig::default()
    };
    let err = PrimaryGeneratorAction::from_config(&config).unwrap_err();
    assert_eq!(err.info().code, "reader-needs-stream");
}
