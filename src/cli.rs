use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "probex",
    about = "Adaptive hybrid search over sorted numeric sequences",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate a value in a sorted sequence read from a file or stdin
    Find {
        /// Value to locate
        target: f64,

        /// Path to a whitespace-separated list of numbers (stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Search strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Hybrid)]
        strategy: StrategyArg,

        /// Deviation threshold for hybrid delegation, as a fraction of the
        /// initial window width
        #[arg(long)]
        threshold: Option<f64>,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Hybrid,
    Fibonacci,
    Interpolation,
}
