use std::path::PathBuf;

use bisect_solvers::bisection::DEFAULT_MAX_ITERS;
use clap::Parser;
use log::LevelFilter;

/// Command line and environment configuration for the console.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Find polynomial roots with the bisection method", long_about = None)]
pub struct CliConfig {
    /// Maximum number of bisection passes per problem.
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERS)]
    pub max_iterations: usize,

    /// Where to write the plot when no native window is available.
    #[arg(long, env = "BISECT_PLOT_OUTPUT", default_value = "bisection_plot.svg")]
    pub plot_output: PathBuf,

    /// Log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[arg(long, env = "BISECT_LOG", default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}
