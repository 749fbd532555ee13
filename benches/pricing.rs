use std::hint::black_box;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use mcpricer_rs::quant::pricing::montecarlo::MonteCarloPricer;
use mcpricer_rs::quant::OptionType;
use mcpricer_rs::stochastic::gbm::Gbm;

fn bench_terminal_pricing(c: &mut Criterion) {
  let mut group = c.benchmark_group("MonteCarloPricer");

  for n_paths in [1_000usize, 10_000, 100_000] {
    let pricer = MonteCarloPricer::builder(100.0, 0.2, 100.0, 0.05)
      .tau(1.0)
      .option_type(OptionType::Call)
      .n_paths(n_paths)
      .seed(42)
      .build();

    group.bench_with_input(BenchmarkId::from_parameter(n_paths), &pricer, |b, pricer| {
      b.iter(|| black_box(pricer.estimate().unwrap().price));
    });
  }

  group.finish();
}

fn bench_path_grid(c: &mut Criterion) {
  let mut group = c.benchmark_group("Gbm");

  let gbm = Gbm::new(0.05, 0.2, 100, 100.0, Some(1.0), Some(42)).unwrap();
  group.bench_function("sample_grid 100x5", |b| {
    b.iter(|| black_box(gbm.sample_grid(5)));
  });

  group.finish();
}

criterion_group!(benches, bench_terminal_pricing, bench_path_grid);
criterion_main!(benches);
