use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gmm_core::{GmmInput, GroundMotionModel, Imt};
use gmm_models::{Gmm, Idriss14};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn sample_inputs() -> Vec<GmmInput> {
    (0..64)
        .map(|idx| {
            let step = idx as f64;
            GmmInput::builder()
                .mag(5.0 + 0.05 * step)
                .r_rup(1.0 + 2.0 * step)
                .rake(-180.0 + 5.0 * step)
                .vs30(450.0 + 15.0 * step, true)
                .build()
        })
        .collect()
}

fn bench_single_period(c: &mut Criterion) {
    init_tracing();
    let model = Idriss14::new(Imt::Sa0p2).expect("instance");
    let inputs = sample_inputs();
    c.bench_function("idriss14_sa0p2_64_inputs", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(model.calc(black_box(input)).expect("calc"));
            }
        })
    });
}

fn bench_spectrum(c: &mut Criterion) {
    let models: Vec<_> = Gmm::Idriss14
        .supported_imts()
        .expect("imts")
        .into_iter()
        .map(|imt| Gmm::Idriss14.instance(imt).expect("instance"))
        .collect();
    let input = GmmInput::builder().mag(7.0).r_rup(20.0).rake(90.0).build();
    c.bench_function("idriss14_full_spectrum", |b| {
        b.iter(|| {
            for model in &models {
                black_box(model.calc(black_box(&input)).expect("calc"));
            }
        })
    });
}

criterion_group!(benches, bench_single_period, bench_spectrum);
criterion_main!(benches);
