//! Benchmarks for machine operations.
//!
//! Measures machine configuration, single-symbol conversion and message
//! throughput across message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Alphabet, Machine, Permutation, RotorCatalog};

/// Rotor order used consistently across all benchmarks.
const BENCH_ROTORS: [&str; 5] = ["B", "BETA", "III", "IV", "I"];

/// Initial rotor settings.
const BENCH_SETTINGS: &str = "AXLE";

/// Plugboard wiring.
const BENCH_PLUGBOARD: &str = "(HQ) (EX) (IP) (TR) (BY)";

fn configured_machine() -> Machine {
    let alpha = Alphabet::default();
    let mut machine = Machine::new(alpha.clone(), 5, 3, RotorCatalog::naval().unwrap()).unwrap();
    machine.insert_rotors(&BENCH_ROTORS).unwrap();
    machine.set_rotors(BENCH_SETTINGS).unwrap();
    machine
        .set_plugboard(Permutation::new(BENCH_PLUGBOARD, &alpha).unwrap())
        .unwrap();
    machine
}

/// Benchmarks the full configuration path: catalog construction, cycle
/// parsing, rotor insertion, settings and plugboard.
fn bench_configure(c: &mut Criterion) {
    c.bench_function("configure", |b| {
        b.iter(|| black_box(configured_machine()));
    });
}

/// Benchmarks single-symbol `convert()`.
///
/// The machine is configured once and rotors keep stepping between
/// iterations, so notch positions are crossed regularly.
fn bench_convert(c: &mut Criterion) {
    let mut machine = configured_machine();

    let mut group = c.benchmark_group("convert_single_symbol");
    group.throughput(Throughput::Elements(1));

    group.bench_function("naval", |b| {
        let mut index = 0usize;
        b.iter(|| {
            index = machine.convert(black_box(index)).unwrap();
        });
    });

    group.finish();
}

/// Benchmarks `convert_message()` throughput across message lengths.
fn bench_message_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[16, 256, 4096];

    let mut group = c.benchmark_group("convert_message");

    for &len in lengths {
        let message: String = "OMHISSHOULDERHIAWATHA".chars().cycle().take(len).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, msg| {
            let mut machine = configured_machine();
            b.iter(|| {
                black_box(machine.convert_message(black_box(msg)).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_configure, bench_convert, bench_message_scaling);
criterion_main!(benches);
