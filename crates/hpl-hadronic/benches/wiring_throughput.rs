use criterion::{criterion_group, criterion_main, Criterion};

use hpl_core::process::ParticleRegistry;
use hpl_hadronic::anti_baryon::AntiBaryonPhysics;
use hpl_hadronic::constructor::PhysicsConstructor;
use hpl_hadronic::proton::ProtonPhysics;

fn bench_wiring(c: &mut Criterion) {
    c.bench_function("wire_both_families", |b| {
        b.iter(|| {
            let mut registry = ParticleRegistry::new();
            AntiBaryonPhysics::new()
                .construct_processes(&mut registry)
                .unwrap();
            ProtonPhysics::new()
                .construct_processes(&mut registry)
                .unwrap();
            registry
        })
    });
}

criterion_group!(benches, bench_wiring);
criterion_main!(benches);
