// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_selection::{Identity, Selection, SelectionEngine};

fn gen_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("option-{i}")).collect()
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    for &n in &[1_000usize, 100_000] {
        let options = gen_labels(n);
        let engine = SelectionEngine::new(&options, &Identity);
        let empty = Selection::multi([]);
        let all = engine.toggle_all(&empty);
        let last = &options[n - 1];

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("toggle_one_remove_last_n{}", n), |b| {
            b.iter(|| black_box(engine.toggle_one(&all, last)))
        });
        group.bench_function(format!("toggle_all_select_n{}", n), |b| {
            b.iter(|| black_box(engine.toggle_all(&empty)))
        });
        group.bench_function(format!("is_all_selected_n{}", n), |b| {
            b.iter(|| black_box(engine.is_all_selected(&all)))
        });
    }
    group.finish();
}

fn bench_display_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_text");
    let options = gen_labels(100_000);
    let engine = SelectionEngine::new(&options, &Identity);
    for &picked in &[1usize, 100, 10_000] {
        let value = Selection::multi(options.iter().take(picked).cloned());
        group.throughput(Throughput::Elements(picked as u64));
        group.bench_function(format!("join_labels_k{}", picked), |b| {
            b.iter(|| black_box(engine.display_text(&value, "Please select a value").len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_toggle, bench_display_text);
criterion_main!(benches);
