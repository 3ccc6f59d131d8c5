use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symwire_core::{SamplerConfig, TermSampler};
use symwire_eval::{evaluate, Bindings};

fn eval_bench(c: &mut Criterion) {
    let config = SamplerConfig {
        max_depth: 6,
        max_operands: 5,
        ..SamplerConfig::default()
    };
    let bindings: Bindings = config
        .symbols
        .iter()
        .map(|name| (name.clone(), 1.5))
        .collect();
    let mut sampler = TermSampler::from_seed(11, config);
    let terms: Vec<_> = (0..256).map(|_| sampler.sample_term()).collect();

    c.bench_function("evaluate_bound_trees", |b| {
        b.iter(|| {
            for term in &terms {
                let _ = black_box(evaluate(term, &bindings));
            }
        });
    });

    c.bench_function("evaluate_residual_trees", |b| {
        let empty = Bindings::new();
        b.iter(|| {
            for term in &terms {
                let _ = black_box(evaluate(term, &empty));
            }
        });
    });
}

criterion_group!(benches, eval_bench);
criterion_main!(benches);
