use baltree::BalancedTree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

/// The order in which values are fed to an empty tree.
#[derive(Debug, Clone, Copy)]
enum Input {
    /// Every insert lands on the right spine, triggering frequent left
    /// rotations.
    Ascending,
    /// Mirror of [`Input::Ascending`], exercising the right rotations.
    Descending,
    /// Values from the LFSR, mixing single and double rotations.
    Random,
}

impl Input {
    fn name(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Random => "random",
        }
    }

    fn values(self, n: usize) -> Vec<u16> {
        let n = n as u16;
        match self {
            Self::Ascending => (0..n).collect(),
            Self::Descending => (0..n).rev().collect(),
            Self::Random => Lfsr::default().take(n as usize),
        }
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for input in [Input::Ascending, Input::Descending, Input::Random] {
        for n_values in [100, 1_000, 10_000] {
            bench_param(&mut g, input, n_values)
        }
    }
}

/// Build a tree of `n_values` from scratch, in the order given by `input`.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, input: Input, n_values: usize)
where
    M: Measurement,
{
    let values = input.values(n_values);

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_with_input(
        BenchmarkId::new(input.name(), n_values),
        &values,
        |b, values| {
            b.iter_batched(
                BalancedTree::new,
                |mut t| {
                    for &v in values {
                        t.insert(v);
                    }
                    t
                },
                BatchSize::SmallInput,
            );
        },
    );
}
