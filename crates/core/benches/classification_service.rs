use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashlens_core::{classify_batch, render_all, AnalysisService, StaticMetricSource};
use dashlens_domain::{Config, MetricSample, PositiveDirection, Thresholds};

fn sample_metrics() -> Vec<MetricSample> {
    (0..64)
        .map(|idx| {
            let direction =
                if idx % 3 == 0 { PositiveDirection::Down } else { PositiveDirection::Up };
            MetricSample {
                name: format!("Revenue region {idx}"),
                current_value: Some(900.0 + f64::from(idx) * 7.5),
                previous_value: Some(1_000.0),
                thresholds: Some(Thresholds {
                    critical_min: Some(850.0),
                    critical_max: Some(1_300.0),
                    warning_min: Some(950.0),
                    warning_max: Some(1_200.0),
                }),
                positive_direction: direction,
            }
        })
        .collect()
}

fn classification_benchmark(c: &mut Criterion) {
    let samples = sample_metrics();

    let mut group = c.benchmark_group("classification_service");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("classify_batch", |b| {
        b.iter(|| classify_batch(black_box(&samples)));
    });

    group.bench_function("run_and_render", |b| {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let service = Arc::new(AnalysisService::new(
            Arc::new(StaticMetricSource::new(samples.clone())),
            Config::default(),
        ));

        b.iter(|| {
            let service = Arc::clone(&service);
            runtime.block_on(async move {
                let analyses = service.run().await.unwrap();
                black_box(render_all(&analyses, None));
            });
        });
    });

    group.finish();
}

criterion_group!(core_benchmarks, classification_benchmark);
criterion_main!(core_benchmarks);
