#[macro_use]
extern crate flatstore_benchmarks;
use flatstore::compare::Ascending;
use flatstore::storage::SplitLayout;
use flatstore::FlatMap;
use flatstore_benchmarks::MicroBenchmarkArgs;

fn main() {
    let mut args = MicroBenchmarkArgs::default("FlatMap (split layout)");

    let split = &mut FlatMap::<usize, usize, _, _>::with_layout(
        &SplitLayout,
        args.capacity,
        Ascending,
    );

    microbenchmark!(split, &mut args);
}
