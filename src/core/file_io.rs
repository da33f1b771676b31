use std::path::{Path, PathBuf};

use crate::core::error::PlotError;

pub fn extract_base_name(path: &str) -> Result<&str, PlotError> {
    Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .ok_or_else(|| PlotError::invalid_parameter("params_path", format!("no file name in {:?}", path)))
}

/**
 * Builds (and creates on disk) the directory `out/<command>/<params base name>[/<datetime>]`.
 */
pub fn build_output_path_with_date_time(
    params_path: &str,
    command: &str,
    datetime: &Option<String>,
) -> Result<PathBuf, PlotError> {
    let mut dirs = vec!["out", command, extract_base_name(params_path)?];
    if let Some(inner_datetime_str) = datetime {
        dirs.push(inner_datetime_str);
    }

    let directory_path: PathBuf = dirs.iter().collect();
    std::fs::create_dir_all(&directory_path)?;
    Ok(directory_path)
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Some(date_time_string())
    } else {
        None
    }
}

/**
 * Store a path and prefix together, making it easily to quickly generate
 * a collection of files with the same prefix, but separate suffixes.
 */
#[derive(Debug, Clone)]
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    pub fn full_path_with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    pub fn create_file_with_suffix(
        &self,
        suffix: &str,
    ) -> Result<std::io::BufWriter<std::fs::File>, PlotError> {
        let file = std::fs::File::create(self.full_path_with_suffix(suffix))?;
        Ok(std::io::BufWriter::new(file))
    }

    /// Moves the prefix into `directory_path/name`, creating it if needed.
    pub fn create_and_step_into_sub_directory(&mut self, name: &str) -> Result<(), PlotError> {
        self.directory_path.push(name);
        std::fs::create_dir_all(&self.directory_path)?;
        Ok(())
    }
}
