use flatstore::compare::Ascending;
use flatstore::storage::Storage;
use flatstore::{FlatMap, FlatSet};
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use std::vec::IntoIter;

pub mod args;

/// Keys `0..n` in a random order reproducible from `seed`.
pub fn shuffled(n: usize, seed: u8) -> IntoIter<usize> {
    let mut keys: Vec<usize> = (0..n).collect();
    let mut rng = rand::rngs::StdRng::from_seed([seed; 32]);
    rand::seq::SliceRandom::shuffle(keys.as_mut_slice(), &mut rng);
    keys.into_iter()
}

/// The operations measured by the microbenchmarks, keyed by `usize`.
pub trait Container {
    fn len(&self) -> usize;
    fn clear(&mut self);
    fn insert(&mut self, key: usize) -> bool;
    fn extend_keys(&mut self, keys: Vec<usize>);
    fn contains(&self, key: &usize) -> bool;
    fn erase(&mut self, key: &usize) -> usize;
    /// Visit every element in order.
    fn checksum(&self) -> usize;
}

impl<S> Container for FlatMap<usize, usize, Ascending, S>
where
    S: Storage<usize, usize>,
{
    fn len(&self) -> usize {
        FlatMap::len(self)
    }

    fn clear(&mut self) {
        FlatMap::clear(self)
    }

    fn insert(&mut self, key: usize) -> bool {
        FlatMap::insert(self, key, key).1
    }

    fn extend_keys(&mut self, keys: Vec<usize>) {
        self.extend(keys.into_iter().map(|k| (k, k)))
    }

    fn contains(&self, key: &usize) -> bool {
        self.contains_key(key)
    }

    fn erase(&mut self, key: &usize) -> usize {
        FlatMap::erase(self, key)
    }

    fn checksum(&self) -> usize {
        self.values().fold(0, |acc, v| acc.wrapping_add(*v))
    }
}

impl<S> Container for FlatSet<usize, Ascending, S>
where
    S: Storage<usize, ()>,
{
    fn len(&self) -> usize {
        FlatSet::len(self)
    }

    fn clear(&mut self) {
        FlatSet::clear(self)
    }

    fn insert(&mut self, key: usize) -> bool {
        FlatSet::insert(self, key).1
    }

    fn extend_keys(&mut self, keys: Vec<usize>) {
        self.extend(keys)
    }

    fn contains(&self, key: &usize) -> bool {
        FlatSet::contains(self, key)
    }

    fn erase(&mut self, key: &usize) -> usize {
        FlatSet::erase(self, key)
    }

    fn checksum(&self) -> usize {
        self.iter().fold(0, |acc, k| acc.wrapping_add(*k))
    }
}

#[derive(Clone, Copy)]
pub enum MicroBenchmark {
    Insert,
    Extend,
    Find,
    Erase,
    Iterate,
}

impl MicroBenchmark {
    pub fn print_result(line: String, file: &mut Option<File>) {
        match file {
            None => println!("{}", line),
            Some(f) => {
                if let Err(e) = writeln!(f, "{}", line) {
                    eprintln!("Failed to write result: {}", e);
                }
            }
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            MicroBenchmark::Insert => "# container container.len nanoseconds",
            MicroBenchmark::Extend => "# container extend.len nanoseconds",
            MicroBenchmark::Find => "# container container.len nanoseconds",
            MicroBenchmark::Erase => "# container container.len nanoseconds",
            MicroBenchmark::Iterate => "# container container.len nanoseconds",
        }
    }

    fn fill<C: Container>(container: &mut C, n: usize) {
        container.clear();
        for key in shuffled(n, 0) {
            container.insert(key);
        }
    }

    pub fn bench_insert<C: Container>(
        name: &str,
        container: &mut C,
        n: usize,
        file: &mut Option<File>,
    ) {
        container.clear();

        for key in shuffled(n, 0) {
            let t = Instant::now();
            container.insert(key);
            let t = t.elapsed().as_nanos();
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }

    pub fn bench_extend<C: Container>(
        name: &str,
        container: &mut C,
        n: usize,
        file: &mut Option<File>,
    ) {
        for n in 1..n + 1 {
            container.clear();
            let keys: Vec<usize> = shuffled(n, 0).collect();
            let t = Instant::now();
            container.extend_keys(keys);
            let t = t.elapsed().as_nanos();
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }

    pub fn bench_find<C: Container>(
        name: &str,
        container: &mut C,
        n: usize,
        file: &mut Option<File>,
    ) {
        MicroBenchmark::fill(container, n);

        // Half of the lookups miss.
        for key in shuffled(2 * n, 2) {
            let t = Instant::now();
            let found = container.contains(&key);
            let t = t.elapsed().as_nanos();
            assert_eq!(found, key < n);
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }

    pub fn bench_erase<C: Container>(
        name: &str,
        container: &mut C,
        n: usize,
        file: &mut Option<File>,
    ) {
        MicroBenchmark::fill(container, n);

        for key in shuffled(n, 2) {
            let t = Instant::now();
            container.erase(&key);
            let t = t.elapsed().as_nanos();
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }

    pub fn bench_iterate<C: Container>(
        name: &str,
        container: &mut C,
        n: usize,
        file: &mut Option<File>,
    ) {
        container.clear();

        for key in shuffled(n, 0) {
            container.insert(key);
            let t = Instant::now();
            let sum = container.checksum();
            let t = t.elapsed().as_nanos();
            std::hint::black_box(sum);
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }
}

#[macro_export]
macro_rules! microbenchmark {
    ($container:ident, $args: expr) => {
        let args: &mut $crate::MicroBenchmarkArgs = $args;
        let name: &str = stringify!($container);
        let n = args.capacity;
        let file = &mut args.file;

        if args.header {
            $crate::MicroBenchmark::print_result(
                String::from(args.bench.header()),
                file,
            );
        }

        match args.bench {
            $crate::MicroBenchmark::Insert => {
                $crate::MicroBenchmark::bench_insert(name, $container, n, file);
            }
            $crate::MicroBenchmark::Extend => {
                $crate::MicroBenchmark::bench_extend(name, $container, n, file);
            }
            $crate::MicroBenchmark::Find => {
                $crate::MicroBenchmark::bench_find(name, $container, n, file);
            }
            $crate::MicroBenchmark::Erase => {
                $crate::MicroBenchmark::bench_erase(name, $container, n, file);
            }
            $crate::MicroBenchmark::Iterate => {
                $crate::MicroBenchmark::bench_iterate(name, $container, n, file);
            }
        }
    };
}
