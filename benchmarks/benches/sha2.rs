// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use vellum_sha2::{VariantId, hash};

fn benchmark_sha2_throughput(c: &mut Criterion) {
    for id in [VariantId::Sha256, VariantId::Sha512, VariantId::Sha512Trunc256] {
        let mut group = c.benchmark_group(format!("sha2/{}", id.name()));

        for len in [64usize, 1024, 16 * 1024, 1024 * 1024].iter() {
            let data = vec![0xa5u8; *len];

            group.throughput(Throughput::Bytes(*len as u64));
            group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
                b.iter(|| hash(black_box(data), id));
            });
        }
        group.finish();
    }
}

fn benchmark_sha2_short_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2/short");

    // Lengths on either side of the one-block padding limit
    for len in [0usize, 55, 56, 111, 112].iter() {
        let data = vec![0x61u8; *len];

        for id in [VariantId::Sha224, VariantId::Sha384] {
            group.bench_with_input(
                BenchmarkId::new(id.name(), len),
                &data,
                |b, data| {
                    b.iter(|| hash(black_box(data), id));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_sha2_throughput, benchmark_sha2_short_messages);
criterion_main!(benches);
