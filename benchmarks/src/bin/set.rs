#[macro_use]
extern crate flatstore_benchmarks;
use flatstore::FlatSet;
use flatstore_benchmarks::MicroBenchmarkArgs;

fn main() {
    let mut args = MicroBenchmarkArgs::default("FlatSet");

    let set = &mut FlatSet::<usize>::with_capacity(args.capacity);

    microbenchmark!(set, &mut args);
}
