// benches/lookup_performance.rs
//! Benchmarks for catalog lookup and error handling hot paths.
//!
//! Lookup is expected to stay allocation-free and roughly flat across
//! categories; rendering and recording allocate only for long fields.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tke_error_codes::{definitions, lookup, Action, ApiError, ErrorLedger};

// ============================================================================
// Lookup
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let cases = [
        ("bare", "InvalidParameter"),
        ("first_in_large_family", "InternalError"),
        ("last_in_large_family", "InternalError.WhitelistUnexpectedError"),
        ("small_family", "ResourceNotFound.ClusterNotFound"),
        ("unknown_category", "SomeNewCode.Whatever"),
        ("unknown_subcode", "InternalError.BrandNew"),
        ("wrong_case", "invalidparameter"),
    ];

    for (name, raw) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            b.iter(|| lookup(black_box(raw)))
        });
    }

    group.finish();
}

fn bench_full_catalog_scan(c: &mut Criterion) {
    let wires: Vec<&str> = definitions::iter().map(|code| code.wire()).collect();

    c.bench_function("lookup_every_entry", |b| {
        b.iter(|| {
            let mut known = 0usize;
            for raw in &wires {
                known += usize::from(lookup(black_box(raw)).is_known());
            }
            known
        })
    });
}

// ============================================================================
// ApiError
// ============================================================================

fn bench_api_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("api_error");

    group.bench_function("new_known", |b| {
        b.iter(|| {
            ApiError::new(
                black_box("ResourceUnavailable.ClusterState"),
                black_box("cluster is upgrading"),
                black_box("req-1"),
            )
        })
    });

    group.bench_function("new_unknown", |b| {
        b.iter(|| ApiError::new(black_box("SomeNewCode.Whatever"), "m", "r"))
    });

    let err = ApiError::new("InternalError.Db", "db timeout", "req-2")
        .with_action(Action::DescribeClusterAsGroups);
    let mut buffer = String::with_capacity(256);

    group.bench_function("log_write_to", |b| {
        b.iter(|| {
            buffer.clear();
            err.log().write_to(&mut buffer).unwrap();
            buffer.len()
        })
    });

    let long = ApiError::new("InternalError", "x".repeat(8192), "req-3");
    group.bench_function("log_write_to_truncated", |b| {
        b.iter(|| {
            buffer.clear();
            long.log().write_to(&mut buffer).unwrap();
            buffer.len()
        })
    });

    group.finish();
}

// ============================================================================
// Ledger
// ============================================================================

fn bench_ledger(c: &mut Criterion) {
    let ledger = ErrorLedger::new(1024, 256);
    let err = ApiError::new("LimitExceeded", "quota", "req-4")
        .with_action(Action::ModifyClusterAsGroupAttribute);

    c.bench_function("ledger_record", |b| b.iter(|| ledger.record(black_box(&err))));
    c.bench_function("ledger_get_recent_10", |b| b.iter(|| ledger.get_recent(black_box(10))));
}

criterion_group!(
    benches,
    bench_lookup,
    bench_full_catalog_scan,
    bench_api_error,
    bench_ledger
);
criterion_main!(benches);
