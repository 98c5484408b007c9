//! Performance benchmarks for the derived view helpers
//!
//! These run on every published view model change, so they must stay well
//! under a frame: full heat grid <1ms, tier slicing <10us, tooltip
//! composition <50us for 100 tracked series.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use guildboard_core::models::{HeatmapCell, RankingEntry, TrendPoint};
use guildboard_core::visual::{map_intensity, paginate, tooltip_entries, LineContext};

fn generate_ranking(count: usize) -> Vec<RankingEntry> {
    (0..count)
        .map(|i| RankingEntry {
            user_id: i.to_string(),
            display_name: format!("user-{i}"),
            username: format!("u{i}"),
            avatar: None,
            message_count: (count - i) as u64 * 7,
            char_count: (count - i) as u64 * 120,
        })
        .collect()
}

fn generate_cells() -> Vec<HeatmapCell> {
    let mut cells = Vec::with_capacity(168);
    for dow in 0..7u8 {
        for hour in 0..24u8 {
            cells.push(HeatmapCell {
                dow,
                hour,
                count: (dow as u64 * 31 + hour as u64 * 7) % 500,
            });
        }
    }
    cells
}

fn generate_point(series: usize) -> TrendPoint {
    TrendPoint {
        date: chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        total: (series * 10) as u64,
        by_user: (0..series).map(|i| (i.to_string(), (i * 3) as u64)).collect(),
    }
}

fn intensity_benchmark(c: &mut Criterion) {
    let cells = generate_cells();
    c.bench_function("map_intensity_full_grid", |b| {
        b.iter(|| black_box(map_intensity(black_box(&cells))));
    });
}

fn tiers_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");
    for count in [10, 100, 1000] {
        let ranking = generate_ranking(count);
        group.bench_with_input(BenchmarkId::new("entries", count), &ranking, |b, ranking| {
            b.iter(|| {
                let tiers = paginate(black_box(ranking));
                black_box(tiers.reveal_all().count())
            });
        });
    }
    group.finish();
}

fn tooltip_benchmark(c: &mut Criterion) {
    let point = generate_point(100);
    let ctx = LineContext {
        viewer: Some("42"),
        focused: Some("99"),
        top_user: Some("0"),
    };
    c.bench_function("tooltip_entries_100_series", |b| {
        b.iter(|| black_box(tooltip_entries(black_box(&point), black_box(&ctx))));
    });
}

criterion_group!(benches, intensity_benchmark, tiers_benchmark, tooltip_benchmark);
criterion_main!(benches);
