use crate::microbenchmarks::MicroBenchmark;
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use std::fs::{File, OpenOptions};

const BENCHMARKS: [(&str, MicroBenchmark); 5] = [
    ("insert", MicroBenchmark::Insert),
    ("extend", MicroBenchmark::Extend),
    ("find", MicroBenchmark::Find),
    ("erase", MicroBenchmark::Erase),
    ("iterate", MicroBenchmark::Iterate),
];

pub struct MicroBenchmarkArgs {
    pub bench: MicroBenchmark,
    pub capacity: usize,
    pub file: Option<File>,
    pub header: bool,
}

impl MicroBenchmarkArgs {
    fn opt_arg(app: Command) -> Command {
        let g = ArgGroup::new("bench")
            .arg("insert")
            .arg("extend")
            .arg("find")
            .arg("erase")
            .arg("iterate")
            .required(true)
            .multiple(false);

        let insert = Arg::new("insert").long("insert").action(ArgAction::SetTrue).help("Insert keys 0..capacity one by one in a random order and measure each insertion.");
        let extend = Arg::new("extend").long("extend").action(ArgAction::SetTrue).help("Measure the bulk insertion of random sets of keys of increasing lengths in an empty container.");
        let find = Arg::new("find").long("find").action(ArgAction::SetTrue).help("Fill a container with keys 0..capacity and measure lookups of random keys, half of them absent.");
        let erase = Arg::new("erase").long("erase").action(ArgAction::SetTrue).help("Fill a container with keys 0..capacity and measure the erasure of each key in a random order.");
        let iterate = Arg::new("iterate").long("iterate").action(ArgAction::SetTrue).help("Measure a full ordered traversal after each insertion of keys 0..capacity.");

        app.arg(insert)
            .arg(extend)
            .arg(find)
            .arg(erase)
            .arg(iterate)
            .group(g)
    }

    fn from_arg(args: &ArgMatches) -> MicroBenchmark {
        BENCHMARKS
            .iter()
            .find(|(name, _)| args.get_flag(name))
            .map(|(_, bench)| *bench)
            .expect("Unexpected benchmark name.")
    }

    pub fn base_app(app_name: &str) -> Command {
        let app = Command::new(app_name).version(env!("CARGO_PKG_VERSION"));
        let capacity_arg = Arg::new("capacity")
            .short('c')
            .help("Number of keys in the container.")
            .value_parser(value_parser!(usize))
            .action(ArgAction::Set)
            .required(false);
        let file_arg = Arg::new("output-file")
            .short('o')
            .help(
                "File where to write results. If not provided, results
are written to stdout.",
            )
            .action(ArgAction::Set)
            .required(false);
        let header_arg = Arg::new("with-header")
            .short('t')
            .help("Whether or not to print benchmark header.")
            .action(ArgAction::SetTrue)
            .required(false);

        MicroBenchmarkArgs::opt_arg(app)
            .arg(capacity_arg)
            .arg(file_arg)
            .arg(header_arg)
    }

    pub fn build(app: Command) -> (Self, ArgMatches) {
        let matches = app.get_matches();

        let margs = MicroBenchmarkArgs {
            bench: MicroBenchmarkArgs::from_arg(&matches),
            capacity: matches
                .get_one::<usize>("capacity")
                .copied()
                .unwrap_or(1000usize),
            file: matches.get_one::<String>("output-file").map(|f| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(f)
                    .expect("Cannot open output file")
            }),
            header: matches.get_flag("with-header"),
        };

        (margs, matches)
    }

    pub fn default(app_name: &str) -> Self {
        let about =
            format!("Run a microbenchmark for {} containers.", app_name);
        let app = MicroBenchmarkArgs::base_app(app_name).about(about.as_ref());
        MicroBenchmarkArgs::build(app).0
    }
}
