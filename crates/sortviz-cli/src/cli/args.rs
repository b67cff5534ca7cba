use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sortviz",
    version,
    about = "Step-by-step traces of bubble, selection, insertion, merge, quick and radix sort"
)]
pub struct Cli {
    /// Engine config (YAML). Built-in defaults apply when omitted.
    #[arg(long, global = true, env = "SORTVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort an array and print every recorded step
    Run(RunArgs),
    /// Print a random array suitable for `run --array`
    Random(RandomArgs),
    /// List the supported algorithms
    Algorithms(AlgorithmsArgs),
    /// Answer sort requests as line-delimited JSON on stdin/stdout
    Serve,
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["array", "random"])))]
pub struct RunArgs {
    /// bubble | selection | insertion | merge | quick | radix
    #[arg(long, short)]
    pub algorithm: String,

    /// Comma-separated integers, e.g. "5,3,8,1"
    #[arg(long, allow_hyphen_values = true)]
    pub array: Option<String>,

    /// Sort a random array shaped by the config's `random` section
    #[arg(long)]
    pub random: bool,

    /// Seed for --random (reproducible arrays)
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Check the trace invariants before printing
    #[arg(long)]
    pub verify: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RandomArgs {
    /// Number of elements (default from config)
    #[arg(long)]
    pub len: Option<usize>,

    /// Largest value, inclusive (default from config)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub max: Option<i64>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AlgorithmsArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
