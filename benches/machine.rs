use criterion::{black_box, criterion_group, criterion_main, Criterion};
use namesys::base::types::{Address, ChainId};
use namesys::machine::{step, Context, Event, State};

fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("machine_step");

    group.bench_function("resolve_domain_accept", |b| {
        b.iter(|| {
            black_box(step(
                State::Idle,
                Context::default(),
                None,
                Event::ResolveDomain {
                    domain: "alice.fuel".into(),
                    chain_id: Some(ChainId::new(0)),
                },
            ))
        });
    });

    group.bench_function("resolve_domain_reject", |b| {
        b.iter(|| {
            black_box(step(
                State::Idle,
                Context::default(),
                None,
                Event::ResolveDomain {
                    domain: "Not A Domain".into(),
                    chain_id: Some(ChainId::new(0)),
                },
            ))
        });
    });

    group.bench_function("toggle_dropdown", |b| {
        let context = Context::default();
        b.iter(|| {
            black_box(step(
                State::Idle,
                context.clone(),
                None,
                Event::ToggleDropdown { open: true },
            ))
        });
    });

    group.bench_function("set_domain", |b| {
        b.iter(|| {
            black_box(step(
                State::Idle,
                Context::default(),
                None,
                Event::SetDomain {
                    domain: "alice.fuel".into(),
                    chain_id: ChainId::new(0),
                    address: Address::new(
                        "0x3e5fbd2ba8a1bc6b76fdde06ca70982c5b2c145fd1d7ae9e0a4e23bfa0534c1f",
                    ),
                },
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transitions);
criterion_main!(benches);
