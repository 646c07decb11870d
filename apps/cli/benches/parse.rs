// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark of end-to-end OBJ parsing on generated grid meshes.
//!
//! Run with: cargo bench -p obj-lite-cli --bench parse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use obj_lite_core::LineScanner;
use obj_lite_geometry::parse_obj;

/// `n` x `n` grid of quads, with uvs and one shared normal
fn grid(n: usize) -> String {
    let mut text = String::from("o grid\nvn 0 0 1\n");
    for y in 0..=n {
        for x in 0..=n {
            text.push_str(&format!("v {} {} 0\n", x as f32 * 0.5, y as f32 * 0.5));
            text.push_str(&format!("vt {} {}\n", x as f32 / n as f32, y as f32 / n as f32));
        }
    }
    text.push_str("usemtl surface\ns off\n");
    let row = n + 1;
    for y in 0..n {
        for x in 0..n {
            let a = y * row + x + 1;
            let (b, c, d) = (a + 1, a + row + 1, a + row);
            text.push_str(&format!("f {a}/{a}/1 {b}/{b}/1 {c}/{c}/1 {d}/{d}/1\n"));
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_obj");

    for n in [16, 64, 256] {
        let text = grid(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| parse_obj(black_box(text)))
        });
    }

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let text = grid(128);
    c.bench_function("count_by_keyword", |b| {
        b.iter(|| LineScanner::new(black_box(&text)).count_by_keyword())
    });
}

criterion_group!(benches, bench_parse, bench_count);
criterion_main!(benches);
