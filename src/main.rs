use std::path::PathBuf;
use std::process;

use log::{error, info};
use structopt::StructOpt;

use minimum_spanning_tree::{io, runner, RunConfig};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "mst",
    about = "Computes minimum spanning trees with Prim's and Kruskal's algorithms"
)]
struct Opt {
    /// JSON file with the graphs to process
    #[structopt(
        short,
        long,
        parse(from_os_str),
        default_value = "ass_3_input.json"
    )]
    input: PathBuf,

    /// Where to write the JSON report
    #[structopt(
        short,
        long,
        parse(from_os_str),
        default_value = "ass_3_output.json"
    )]
    output: PathBuf,

    /// Largest accepted difference between the two total costs
    #[structopt(long, default_value = "0.0")]
    tolerance: f64,

    /// Treat a cost mismatch as a failure of that graph
    #[structopt(long)]
    strict: bool,

    /// Write single-line JSON
    #[structopt(long)]
    compact: bool,

    /// Log debug output
    #[structopt(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[structopt(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logger(opt: &Opt) {
    let level = if opt.verbose {
        "debug"
    } else if opt.quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(opt: &Opt) -> minimum_spanning_tree::Result<()> {
    let input = io::load_input(&opt.input)?;

    info!(
        "Loaded {} graph(s) from '{}'.",
        input.graphs.len(),
        opt.input.display()
    );

    let config = RunConfig {
        tolerance: opt.tolerance,
        strict: opt.strict,
    };
    let output = runner::process_all(&input, &config);

    io::save_output(&opt.output, &output, !opt.compact)?;

    info!(
        "Saved results for {} graph(s) to '{}'.",
        output.results.len(),
        opt.output.display()
    );
    if !output.failures.is_empty() {
        error!("{} graph(s) could not be processed", output.failures.len());
    }

    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    init_logger(&opt);

    if let Err(err) = run(&opt) {
        error!("{}", err);
        process::exit(1);
    }
}
