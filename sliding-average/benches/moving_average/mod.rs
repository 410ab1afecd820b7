use criterion::{BenchmarkId, Criterion, Throughput, black_box};
use rand::{Rng, SeedableRng, rngs::StdRng};
use sliding_average::{Method, MovingAverage, WindowSize};

criterion::criterion_main!(benchmark_moving_average);

const SEED: u64 = 42;

fn benchmark_moving_average() {
    let mut c = Criterion::default().without_plots();

    // Window growth hurts Naive only
    bench_window_sizes(&mut c, 10_000, &[3, 50, 500]);

    bench_sequence_lengths(&mut c, 20, &[1_000, 10_000, 100_000]);

    c.final_summary();
}

fn bench_window_sizes(c: &mut Criterion, len: usize, windows: &[usize]) {
    let data = generate_data(len);

    let mut group = c.benchmark_group("Moving Average Window Size");
    group.warm_up_time(std::time::Duration::from_secs(1));
    group.measurement_time(std::time::Duration::from_secs(5));
    group.throughput(Throughput::Elements(len as u64));

    for &window in windows {
        let window = WindowSize::new(window).unwrap();
        for method in Method::ALL {
            group.bench_with_input(
                BenchmarkId::new(method.name(), window.get()),
                &data,
                |b, data| b.iter(|| method.calculate(black_box(data), black_box(window))),
            );
        }
    }

    group.finish();
}

fn bench_sequence_lengths(c: &mut Criterion, window: usize, lens: &[usize]) {
    let window = WindowSize::new(window).unwrap();

    let mut group = c.benchmark_group("Moving Average Sequence Length");
    group.warm_up_time(std::time::Duration::from_secs(1));
    group.measurement_time(std::time::Duration::from_secs(5));

    for &len in lens {
        let data = generate_data(len);
        group.throughput(Throughput::Elements(len as u64));
        for method in Method::ALL {
            group.bench_with_input(BenchmarkId::new(method.name(), len), &data, |b, data| {
                b.iter(|| method.calculate(black_box(data), black_box(window)))
            });
        }
    }

    group.finish();
}

fn generate_data(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..len)
        .map(|_| rng.random_range(-1_000.0..1_000.0))
        .collect()
}
