use clap::{Args, Parser, Subcommand};

use crate::plots::roots_of_unity::{DEFAULT_OUTPUT_FILE, DEFAULT_ROOT_COUNT};

/// Plot the roots of unity on the unit circle. With no command, the 12th roots
/// of unity are written to `cyclotomic_roots.png`.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct CyclotomicPlotterArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Plot with the default style, directly to an image file.
    Plot(PlotArgs),
    /// Plot from a JSON parameter file, writing into the `out/` directory.
    Render(ParameterFilePath),
    /// Print the value of each root.
    Roots(RootsArgs),
}

#[derive(Debug, Args)]
pub struct PlotArgs {
    #[arg(default_value_t = DEFAULT_ROOT_COUNT)]
    pub root_count: u32,

    #[clap(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,
}

impl Default for PlotArgs {
    fn default() -> Self {
        PlotArgs {
            root_count: DEFAULT_ROOT_COUNT,
            output: String::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    #[clap(long, short)]
    pub date_time_out: bool,
}

#[derive(Debug, Args)]
pub struct RootsArgs {
    #[arg(default_value_t = DEFAULT_ROOT_COUNT)]
    pub root_count: u32,
}
