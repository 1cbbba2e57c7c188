#[macro_use]
extern crate flatstore_benchmarks;
use flatstore::FlatMap;
use flatstore_benchmarks::MicroBenchmarkArgs;

fn main() {
    let mut args = MicroBenchmarkArgs::default("FlatMap (pair layout)");

    let pairs = &mut FlatMap::<usize, usize>::with_capacity(args.capacity);

    microbenchmark!(pairs, &mut args);
}
