use clap::Parser;
use cyclotomic_plotter::cli::args::{CommandsEnum, CyclotomicPlotterArgs, PlotArgs};
use cyclotomic_plotter::cli::render::{plot_roots, render_plot};
use cyclotomic_plotter::cli::roots::write_root_table;
use cyclotomic_plotter::core::error::PlotError;
use cyclotomic_plotter::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
};
use cyclotomic_plotter::plots::common::PlotParams;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: CyclotomicPlotterArgs = CyclotomicPlotterArgs::parse();

    match &args.command {
        Some(CommandsEnum::Plot(plot_args)) => plot_roots(plot_args),

        Some(CommandsEnum::Render(params)) => {
            let file_prefix = FilePrefix {
                directory_path: build_output_path_with_date_time(
                    &params.params_path,
                    "render",
                    &maybe_date_time_string(params.date_time_out),
                )?,
                file_base: extract_base_name(&params.params_path)?.to_owned(),
            };
            render_plot(&PlotParams::from_file(&params.params_path)?, file_prefix)
        }

        Some(CommandsEnum::Roots(roots_args)) => {
            let stdout = std::io::stdout();
            write_root_table(roots_args.root_count, &mut stdout.lock())
        }

        None => plot_roots(&PlotArgs::default()),
    }
}
