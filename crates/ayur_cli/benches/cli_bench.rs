use ayur_cli::locale_en::EnglishLocale;
use ayur_cli::{build_chart, parse_position};
use ayur_engine::{analyze_trimurti, assess_longevity, render_longevity_report};
use ayur_vedic_base::{Rashi, rashi_from_longitude};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn sample_specs() -> Vec<String> {
    vec![
        "sun=95.0".to_string(),
        "moon=210.0".to_string(),
        "mars=120.0".to_string(),
        "mercury=100.0,r".to_string(),
        "jupiter=155.0".to_string(),
        "venus=60.0".to_string(),
        "saturn=200.0,r".to_string(),
        "rahu=30.0".to_string(),
        "ketu=210.0".to_string(),
    ]
}

fn cli_bench(c: &mut Criterion) {
    let specs = sample_specs();
    let chart = build_chart(215.0, &specs).unwrap();
    let lagna: Rashi = rashi_from_longitude(215.0);
    let trimurti = analyze_trimurti(&chart, lagna);
    let assessment = assess_longevity(&chart, &trimurti, lagna);

    let mut group = c.benchmark_group("cli");
    group.bench_function("parse_position", |b| {
        b.iter(|| parse_position(black_box("mercury=100.5,r")))
    });
    group.bench_function("build_chart", |b| {
        b.iter(|| build_chart(black_box(215.0), &specs))
    });
    group.bench_function("render_longevity_report", |b| {
        b.iter(|| render_longevity_report(black_box(&assessment), &EnglishLocale))
    });
    group.finish();
}

criterion_group!(benches, cli_bench);
criterion_main!(benches);
