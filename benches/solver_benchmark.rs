//! Criterion benchmarks for the solver hot paths.
//!
//! The solver runs on every scroll delta, so both the cubic inverse
//! evaluation and the bounded probe have per-frame budgets. Run with:
//! `cargo bench --bench solver_benchmark`.

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scrollsel::model::{Edge, SelectionParams};
use scrollsel::solver::curve::curve_at_x;
use scrollsel::solver::{edge_distance, solve, ItemBounds, ItemSizer, ListLayout};

/// Synthetic virtualized list with uniform item heights.
struct BenchList {
    heights: Vec<i32>,
    scroll_px: i32,
    viewport_px: i32,
}

impl BenchList {
    fn top_of(&self, index: usize) -> i32 {
        self.heights[..index].iter().sum()
    }

    fn is_visible(&self, index: usize) -> bool {
        let top = self.top_of(index);
        let bottom = top + self.heights[index];
        top < self.scroll_px + self.viewport_px && bottom > self.scroll_px
    }
}

impl ListLayout for BenchList {
    fn item_count(&self) -> usize {
        self.heights.len()
    }

    fn first_visible(&self) -> Option<usize> {
        (0..self.heights.len()).find(|&i| self.is_visible(i))
    }

    fn last_visible(&self) -> Option<usize> {
        (0..self.heights.len()).rev().find(|&i| self.is_visible(i))
    }

    fn item_bounds(&self, index: usize) -> Option<ItemBounds> {
        self.is_visible(index).then(|| ItemBounds {
            y: self.top_of(index) - self.scroll_px,
            height: self.heights[index],
        })
    }

    fn viewport_height(&self) -> i32 {
        self.viewport_px
    }
}

struct BenchSizer {
    heights: Vec<i32>,
}

impl ItemSizer for BenchSizer {
    fn measure(&mut self, index: usize) -> i32 {
        self.heights[index]
    }
}

fn bench_curve_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_at_x");
    for stiffness in [0.0f64, 0.5, 1.0] {
        let curvature = 1.0 - stiffness;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("stiffness_{stiffness}")),
            &curvature,
            |b, &curvature| {
                b.iter(|| {
                    // Sweep the domain the composer actually evaluates.
                    for x in (0..=2500).step_by(125) {
                        black_box(curve_at_x(2500.0, 0.5, curvature, f64::from(x)));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_distance");
    // 50k items of 12 px each, scrolled into the middle: the probe cost must
    // track the perception range, not the item count.
    let heights = vec![12; 50_000];
    for range in [500i32, 2500, 10_000] {
        let list = BenchList {
            heights: heights.clone(),
            scroll_px: 300_000,
            viewport_px: 800,
        };
        let mut sizer = BenchSizer {
            heights: heights.clone(),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("range_{range}")),
            &range,
            |b, &range| {
                b.iter(|| {
                    black_box(edge_distance(&list, &mut sizer, Edge::Top, range));
                    black_box(edge_distance(&list, &mut sizer, Edge::Bottom, range));
                });
            },
        );
    }
    group.finish();
}

fn bench_full_solve(c: &mut Criterion) {
    let heights = vec![12; 50_000];
    let params = SelectionParams::default();
    // Near the top so one edge is inside the default perception range.
    let list = BenchList {
        heights: heights.clone(),
        scroll_px: 1000,
        viewport_px: 800,
    };
    let mut sizer = BenchSizer { heights };
    c.bench_function("solve_near_top", |b| {
        b.iter(|| black_box(solve(&list, &mut sizer, &params)));
    });
}

criterion_group!(benches, bench_curve_inverse, bench_probe, bench_full_solve);
criterion_main!(benches);
