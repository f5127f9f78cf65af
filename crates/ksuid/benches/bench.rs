use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ksuid::{
    BasicKsuidGenerator, BasicMonoKsuidGenerator, IdGenStatus, KSUID_EPOCH, Ksuid, KsuidGenerator,
    LockMonoKsuidGenerator, MonotonicClock, RandSource, ThreadRandom, TimeSource, Uint128,
    decode_base62, encode_base62,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    secs: u64,
}

impl TimeSource for FixedMockTime {
    fn current_secs(&self) -> u64 {
        self.secs
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

const SAMPLE: &str = "0ujtsYcgvSTl8PAuAdqWYSMnLOv";

fn mock_time() -> FixedMockTime {
    FixedMockTime {
        secs: KSUID_EPOCH.as_secs() + 1,
    }
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));

    let id: Ksuid = SAMPLE.parse().unwrap();
    let bytes = id.to_bytes();

    group.bench_function("encode", |b| b.iter(|| black_box(black_box(&id).encode())));
    group.bench_function("encode_to_buf", |b| {
        let mut buf = Ksuid::buf();
        b.iter(|| {
            black_box(black_box(&id).encode_to_buf(&mut buf));
        });
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(Ksuid::decode(black_box(SAMPLE)).unwrap()));
    });
    group.bench_function("base62/encode", |b| {
        let mut out = [0_u8; 27];
        b.iter(|| encode_base62(black_box(&bytes), &mut out).unwrap());
    });
    group.bench_function("base62/decode", |b| {
        let mut out = [0_u8; 20];
        b.iter(|| decode_base62(black_box(SAMPLE.as_bytes()), &mut out).unwrap());
    });
    group.bench_function("next", |b| b.iter(|| black_box(black_box(id).next())));
    group.bench_function("prev", |b| b.iter(|| black_box(black_box(id).prev())));
    group.bench_function("uint128/increment", |b| {
        b.iter(|| black_box(black_box(Uint128::MAX).increment()));
    });

    group.finish();
}

/// Benchmarks a hot-path generator where IDs are always `Ready`.
fn bench_generator<G, T, R>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: KsuidGenerator<T, R>,
    T: TimeSource,
    R: RandSource<Uint128>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    match generator.try_gen_id().unwrap() {
                        IdGenStatus::Ready { id } => {
                            black_box(id);
                        }
                        IdGenStatus::Pending { .. } => unreachable!(),
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a shared generator across threads with yielding on `Pending`.
fn bench_generator_contended<G, T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> G,
) where
    G: KsuidGenerator<T, R> + Send + Sync,
    T: TimeSource,
    R: RandSource<Uint128>,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(
            format!("elems/{}/threads/{}", TOTAL_IDS, thread_count),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let generator = Arc::new(generator_fn());
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        scope(|s| {
                            for _ in 0..thread_count {
                                let generator = Arc::clone(&generator);
                                let barrier = Arc::clone(&barrier);
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..ids_per_thread {
                                        let id = generator
                                            .try_next_id(|_| std::thread::yield_now())
                                            .unwrap();
                                        black_box(id);
                                    }
                                });
                            }
                            barrier.wait();
                        });
                    }

                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_mock_sequential_basic(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic", || {
        BasicKsuidGenerator::new(mock_time(), ThreadRandom)
    });
}

fn benchmark_mock_sequential_basic_mono(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic_mono", || {
        BasicMonoKsuidGenerator::new(mock_time(), ThreadRandom)
    });
}

fn benchmark_mock_sequential_lock_mono(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/lock_mono", || {
        LockMonoKsuidGenerator::new(mock_time(), ThreadRandom)
    });
}

fn benchmark_mono_threaded_lock_mono(c: &mut Criterion) {
    bench_generator_contended(c, "mono/threaded/lock_mono", || {
        LockMonoKsuidGenerator::new(MonotonicClock::default(), ThreadRandom)
    });
}

criterion_group!(
    benches,
    benchmark_codec,
    // Mock clock
    benchmark_mock_sequential_basic,
    benchmark_mock_sequential_basic_mono,
    benchmark_mock_sequential_lock_mono,
    // Monotonic clock (yielding)
    benchmark_mono_threaded_lock_mono,
);
criterion_main!(benches);
