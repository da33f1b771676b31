pub mod canvas;
pub mod error;
pub mod file_io;
pub mod image_utils;
pub mod polar;
pub mod shapes;
pub mod stopwatch;
pub mod text;
