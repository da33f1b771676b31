pub mod cli;
pub mod core;
pub mod plots;

pub use crate::core::error::PlotError;
pub use crate::plots::roots_of_unity::{render, root_angles, roots_of_unity, RootsOfUnityParams};
