//! # Beacon Light Client Benchmarks
//!
//! | Operation | Committee | Target |
//! |-----------|-----------|--------|
//! | Update verification (BLS fast aggregate verify) | 512 | < 5ms |
//! | SSZ signing root | - | < 10μs |
//! | `process_update` quorum commit | 512 | < 5ms |

use beacon_light_client::algorithms::{compute_domain, compute_signing_root, header_root};
use beacon_light_client::{
    BeaconBlockHeader, BlstCrypto, LightClientSyncApi, PendingProofChecker, SszChainSpec,
    SyncProtocolConfig, SyncProtocolService, UpdateVerifier,
};
use blc_tests::fixtures::{checkpoint, test_fork, TestCommittee, UpdateBuilder};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::time::Duration;

fn mainnet_sized_config() -> SyncProtocolConfig {
    SyncProtocolConfig {
        slots_per_epoch: 1,
        epochs_per_sync_committee_period: 64,
        light_client_update_timeout: 32,
        ..SyncProtocolConfig::default()
    }
}

fn bench_update_verification(c: &mut Criterion) {
    let config = mainnet_sized_config();
    let current = TestCommittee::generate(0xC0, config.sync_committee_size);
    let next = TestCommittee::generate(0xC1, config.sync_committee_size);
    let snapshot = checkpoint(70, &current, &next);

    let mut group = c.benchmark_group("light-client-verify");
    group.measurement_time(Duration::from_secs(10));

    for participants in [342, 512] {
        let update = UpdateBuilder::new(&config, &current, 100)
            .participants(participants)
            .finalized()
            .build();
        let verifier = UpdateVerifier::new(&config, &BlstCrypto, &SszChainSpec, &PendingProofChecker);

        group.bench_with_input(
            BenchmarkId::new("verify_update", participants),
            &update,
            |b, update| {
                b.iter_batched(
                    || update.clone(),
                    |update| black_box(verifier.verify(update, &snapshot).is_ok()),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_signing_root(c: &mut Criterion) {
    let header = BeaconBlockHeader::at_slot(1_000_000, [0x5A; 32]);
    let fork = test_fork();

    c.bench_function("ssz_signing_root", |b| {
        b.iter(|| {
            let domain = compute_domain([7, 0, 0, 0], black_box(&fork));
            black_box(compute_signing_root(&header_root(black_box(&header)), &domain))
        })
    });
}

fn bench_process_update(c: &mut Criterion) {
    let config = mainnet_sized_config();
    let current = TestCommittee::generate(0xC0, config.sync_committee_size);
    let next = TestCommittee::generate(0xC1, config.sync_committee_size);
    let update = UpdateBuilder::new(&config, &current, 100).finalized().build();

    c.bench_function("process_update_quorum_commit", |b| {
        b.iter_batched(
            || {
                let service = SyncProtocolService::with_defaults(
                    config.clone(),
                    checkpoint(70, &current, &next),
                    BlstCrypto,
                )
                .expect("valid checkpoint");
                (service, update.clone())
            },
            |(service, update)| black_box(service.process_update(update, 100)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_update_verification,
    bench_signing_root,
    bench_process_update
);
criterion_main!(benches);
