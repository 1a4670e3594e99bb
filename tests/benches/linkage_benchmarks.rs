//! # Record-Linkage Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | rl-01 Bloom encoding | One record, batches (parallel above the threshold) |
//! | rl-02 Record linkage | Dice similarity, federated matching |
//! | rl-03 Pseudonyms | Padded AES-256-GCM pseudonyms per cluster |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use rl_01_bloom_encoding::{BloomFilterKeys, RecordEncodingApi};
use rl_02_record_linkage::{LinkageService, MatchConfig, Person, RecordLinkageApi};
use rl_03_pseudonyms::{PseudonymGenerator, PseudonymizationApi, ResearchStudyKey};
use rl_tests::fixtures::{encode_organization, encoder, random_people, receive};

// ============================================================================
// RL-01: Bloom Encoding
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rl-01-bloom-encoding");
    group.measurement_time(Duration::from_secs(10));

    let encoder = encoder(&BloomFilterKeys::generate());
    let people = random_people(1000, 1);

    group.bench_function("encode_record", |b| {
        b.iter(|| black_box(encoder.generate_record(&people[0]).unwrap()))
    });

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("encode_batch", size), &size, |b, &size| {
            b.iter(|| black_box(encoder.generate_records(&people[..size]).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// RL-02: Record Linkage
// ============================================================================

fn organizations(count: usize, size: usize) -> Vec<Vec<Person>> {
    let encoder = encoder(&BloomFilterKeys::generate());
    let shared = size / 2;
    let unique = size - shared;
    let people = random_people(shared + count * unique, 2);
    (0..count)
        .map(|org| {
            // The first half of every organization overlaps with the others.
            let own = shared + org * unique;
            let idats: Vec<_> = people[..shared]
                .iter()
                .chain(&people[own..own + unique])
                .cloned()
                .collect();
            let name = format!("org-{}", org);
            receive(&encode_organization(&encoder, &name, &idats), encoder.record_length())
        })
        .collect()
}

fn bench_linkage(c: &mut Criterion) {
    let mut group = c.benchmark_group("rl-02-record-linkage");
    group.measurement_time(Duration::from_secs(10));

    let service = LinkageService::new(MatchConfig::default()).unwrap();

    let pair = organizations(2, 2);
    group.bench_function("dice_similarity", |b| {
        b.iter(|| black_box(service.similarity(&pair[0][0], &pair[1][0])))
    });

    for size in [50, 200] {
        let lists = organizations(2, size);
        group.throughput(Throughput::Elements((size * 2) as u64));
        group.bench_with_input(BenchmarkId::new("federated_two_orgs", size), &lists, |b, lists| {
            b.iter(|| black_box(service.match_federated(lists.clone())))
        });
    }

    group.finish();
}

// ============================================================================
// RL-03: Pseudonyms
// ============================================================================

fn bench_pseudonyms(c: &mut Criterion) {
    let mut group = c.benchmark_group("rl-03-pseudonyms");

    let service = LinkageService::new(MatchConfig::default()).unwrap();
    let clusters = service.match_federated(organizations(3, 100));
    let generator = PseudonymGenerator::new("bench-study", &ResearchStudyKey::generate());

    group.throughput(Throughput::Elements(clusters.len() as u64));
    group.bench_function("create_pseudonyms_and_shuffle", |b| {
        b.iter(|| black_box(generator.create_pseudonyms_and_shuffle(&clusters).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_encoding, bench_linkage, bench_pseudonyms);
criterion_main!(benches);
