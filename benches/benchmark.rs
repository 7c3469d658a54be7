use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hillshade::light::LightSource;
use hillshade::normalize::normalize;
use hillshade::shading::hillshade;
use hillshade::synthetic::two_peak_dem;

fn benchmark_hillshade(c: &mut Criterion) {
    let dem = two_peak_dem(200);
    let light = LightSource::default();

    c.bench_function("hillshade", |b| {
        b.iter(|| hillshade(black_box(&dem), black_box(&light)))
    });
}

fn benchmark_normalize(c: &mut Criterion) {
    let dem = two_peak_dem(200);
    let shading = hillshade(&dem, &LightSource::default());

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&shading)))
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().sample_size(10)
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = benchmark_hillshade, benchmark_normalize
}

criterion_main!(benches);
