// SPDX-License-Identifier: Apache-2.0

//! Throughput of `validate` against a visited parse.
//!
//! Build with `--no-default-features` to measure the string scanner without
//! its unrolled search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pjson::{Directive, Info};

/// Wraps `count` copies of the tagged fixture in one array.
fn records(count: usize) -> Vec<u8> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/tagged.json");
    let record = std::fs::read(path).unwrap_or_else(|e| panic!("reading {path}: {e}"));
    let mut out = vec![b'['];
    for n in 0..count {
        if n > 0 {
            out.push(b',');
        }
        out.extend_from_slice(&record);
    }
    out.push(b']');
    out
}

/// `{"data":"aaaa...."}` padded to `len` bytes.
fn long_string(len: usize) -> Vec<u8> {
    let mut out = br#"{"data":""#.to_vec();
    out.resize(len - 2, b'a');
    out.extend_from_slice(br#""}"#);
    out
}

/// An array of `count` pseudo-random numbers in all notations.
fn numbers(count: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut out = vec![b'['];
    for n in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        if n > 0 {
            out.push(b',');
        }
        let text = match state % 3 {
            0 => format!("{}", state as i64),
            1 => format!("{}.{}", (state >> 20) as i32, state % 1000),
            _ => format!("-{}e{}", state % 97, state % 30),
        };
        out.extend_from_slice(text.as_bytes());
    }
    out.push(b']');
    out
}

fn bench_throughput(c: &mut Criterion) {
    let payloads = [
        ("records", records(200)),
        ("long_string", long_string(1 << 20)),
        ("numbers", numbers(20_000)),
    ];

    let mut group = c.benchmark_group("throughput");
    for (name, json) in &payloads {
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("validate", name), json, |b, json| {
            b.iter(|| pjson::validate(black_box(json)))
        });
        group.bench_with_input(BenchmarkId::new("noop_visitor", name), json, |b, json| {
            b.iter(|| pjson::parse(black_box(json), |_, _, _| Directive::Continue))
        });
        group.bench_with_input(BenchmarkId::new("count_keys", name), json, |b, json| {
            b.iter(|| {
                let mut keys = 0usize;
                let res = pjson::parse(black_box(json), |_, _, info| {
                    if info.contains(Info::KEY) {
                        keys += 1;
                    }
                    Directive::Continue
                });
                black_box((res, keys))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
