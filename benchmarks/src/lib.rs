//! Microbenchmarks of flatstore containers.
//!
//! Each binary runs one benchmark selected on the command line and prints
//! one line per measurement: `container size nanoseconds`.

mod microbenchmarks;
pub use microbenchmarks::args::MicroBenchmarkArgs;
pub use microbenchmarks::{shuffled, Container, MicroBenchmark};
