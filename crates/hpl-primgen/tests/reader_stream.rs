#![cfg(feature = "hepmc3")]

use hpl_core::event::{Event, PrimaryParticle, PrimaryVertex};

use hpl_primgen::config::GeneratorConfig;
use hpl_primgen::generator::{PrimaryGeneratorAction, SourceKind};
use hpl_primgen::reader::{EventRecord, InMemoryStream};

fn reader_config() -> GeneratorConfig {
    GeneratorConfig {
        use_particle_gun: false,
        use_event_reader: true,
        ..GeneratorConfig::default()
    }
}

fn record(pdg: i64, pz: f64) -> EventRecord {
    let mut vertex = PrimaryVertex::new([0.0; 3], 0.0);
    vertex.add_particle(PrimaryParticle::new(pdg, [0.0, 0.0, pz]).unwrap());
    EventRecord {
        vertices: vec![vertex],
    }
}

#[test]
fn reader_forwards_stream_records_in_order() {
    let stream = InMemoryStream::new([record(2212, 1_000.0), record(-2212, 2_000.0)]);
    let mut action =
        PrimaryGeneratorAction::with_stream(&reader_config(), Box::new(stream)).unwrap();
    assert_eq!(action.source_kind(), SourceKind::EventReader);

    let mut first = Event::new(0);
    action.generate_primaries(&mut first).unwrap();
    assert_eq!(first.primary_vertices()[0].particles[0].pdg, 2212);

    let mut second = Event::new(1);
    action.generate_primaries(&mut second).unwrap();
    assert_eq!(second.primary_vertices()[0].particles[0].pdg, -2212);
}

#[test]
fn exhausted_stream_is_a_generator_error() {
    let stream = InMemoryStream::new([record(2212, 1_000.0)]);
    let mut action =
        PrimaryGeneratorAction::with_stream(&reader_config(), Box::new(stream)).unwrap();

    let mut first = Event::new(0);
    action.generate_primaries(&mut first).unwrap();

    let mut second = Event::new(1);
    let err = action.generate_primaries(&mut second).unwrap_err();
    assert_eq!(err.info().code, "stream-exhausted");
    assert_eq!(err.info().context.get("event").unwrap(), "1");
    assert!(second.primary_vertices().is_empty());
}

#[test]
fn stream_with_a_non_reader_selection_is_rejected() {
    let config = GeneratorConfig::default();
    let stream = InMemoryStream::new([record(2212, 1_000.0)]);
    let err = PrimaryGeneratorAction::with_stream(&config, Box::new(stream)).unwrap_err();
    assert_eq!(err.info().code, "stream-unused");
}
