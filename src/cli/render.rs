use std::path::Path;

use crate::core::error::PlotError;
use crate::core::file_io::FilePrefix;
use crate::plots::{
    common::PlotParams,
    roots_of_unity::{render, render_roots_of_unity},
};

use super::args::PlotArgs;

pub fn render_plot(params: &PlotParams, mut file_prefix: FilePrefix) -> Result<(), PlotError> {
    match params {
        PlotParams::RootsOfUnity(inner_params) => {
            file_prefix.create_and_step_into_sub_directory("roots_of_unity")?;
            render_roots_of_unity(inner_params, &file_prefix)
        }
    }
}

pub fn plot_roots(args: &PlotArgs) -> Result<(), PlotError> {
    render(args.root_count, Path::new(&args.output))
}
