use baltree::BalancedTree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to remove every value from a tree of `n_values`
/// randomly generated values, in insertion order.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let values = Lfsr::default().take(n_values);
    let t = values.iter().copied().collect::<BalancedTree<_>>();

    g.throughput(Throughput::Elements(n_values as _)); // Values removed per second
    g.bench_function(BenchmarkId::new("n_values", n_values), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                for v in &values {
                    assert!(t.remove(v));
                }
                t
            },
            BatchSize::LargeInput,
        );
    });
}
