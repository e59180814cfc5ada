// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_dropdown::{Dropdown, DropdownConfig, DropdownProps, Selection};
use understory_virtual_list::{FixedRowWindow, VirtualList};

const ROW_H: f64 = 55.0;
const VIEWPORT: Size = Size::new(320.0, 230.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("option-{i}")).collect()
}

fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("window");
    for &rows in &[1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(64));
        group.bench_function(format!("smooth_scroll_n{}", rows), |b| {
            b.iter_batched(
                || VirtualList::new(FixedRowWindow::new(rows, ROW_H, VIEWPORT)),
                |mut list| {
                    for _ in 0..64 {
                        let _ = list.window_mut().scroll_by(17.0);
                        black_box(list.realize());
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("random_jump_n{}", rows), |b| {
            b.iter_batched(
                || {
                    (
                        VirtualList::new(FixedRowWindow::new(rows, ROW_H, VIEWPORT)),
                        Rng::new(0x9e37_79b9_7f4a_7c15),
                    )
                },
                |(mut list, mut rng)| {
                    for _ in 0..64 {
                        let max = list.window().max_scroll_offset();
                        let _ = list.window_mut().set_scroll_offset(rng.next_f64() * max);
                        black_box(list.realize());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_dropdown_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("dropdown");
    let options = gen_labels(100_000);
    let half: Vec<String> = options.iter().step_by(2).cloned().collect();
    let value = Selection::multi(half);
    let props = DropdownProps::new(&options, &value);

    group.bench_function("render_open_scrolling_n100000", |b| {
        b.iter_batched(
            || {
                let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
                dd.pointer_down(Point::new(5.0, 5.0), &props, &mut |_| {}).unwrap();
                dd
            },
            |mut dd| {
                for _ in 0..16 {
                    let _ = dd.scroll(ROW_H * 997.0);
                    let view = dd.render(&props).unwrap();
                    black_box(view.list.map(|l| l.rows.len()));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("render_closed_n100000", |b| {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        b.iter(|| black_box(dd.render(&props).unwrap().header.text.len()))
    });
    group.finish();
}

criterion_group!(benches, bench_window, bench_dropdown_render);
criterion_main!(benches);
