use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use helix_sim::catalog;
use helix_sim::models::ModelId;
use helix_sim::sim::{ReplySelector, UniformSelector};
use rand::rngs::StdRng;
use rand::SeedableRng;

const ITERATIONS: usize = 1_000;

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let models = [
        ModelId::Gpt35Turbo,
        ModelId::Gpt4,
        ModelId::ClaudeV1,
        ModelId::Llama270b,
    ];

    for model in models {
        let label = model.to_string();
        group.bench_with_input(
            BenchmarkId::new(label, ITERATIONS),
            &model,
            |b, model: &ModelId| {
                b.iter_batched(
                    || (catalog::replies(model), StdRng::seed_from_u64(1)),
                    |(candidates, mut rng)| {
                        let selector = UniformSelector;
                        for _ in 0..ITERATIONS {
                            let reply = selector.select(candidates, &mut rng);
                            black_box(reply);
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
