use std::path::Path;
use std::process::Command;

use sha2::{Digest, Sha256};

fn compute_file_hash(file_path: &Path) -> String {
    let buffer = std::fs::read(file_path)
        .unwrap_or_else(|_| panic!("Unable to read file: {}", file_path.display()));
    format!("{:x}", Sha256::digest(&buffer))
}

fn run_command(working_directory: &Path, args: &[&str]) -> std::process::Output {
    let output = Command::new(env!("CARGO_BIN_EXE_cyclotomic-plotter"))
        .current_dir(working_directory)
        .args(args)
        .output()
        .expect("failed to execute process");
    assert!(
        output.status.success(),
        "Command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn assert_png(path: &Path, resolution: (u32, u32)) {
    assert!(path.is_file(), "missing output file: {}", path.display());
    assert!(std::fs::metadata(path).unwrap().len() > 0);
    let image = image::open(path).unwrap();
    assert_eq!((image.width(), image.height()), resolution);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_writes_cyclotomic_roots_png() {
        let scratch = tempfile::tempdir().unwrap();
        let output_path = scratch.path().join("cyclotomic_roots.png");

        // The file is replaced unconditionally.
        std::fs::write(&output_path, b"stale").unwrap();
        run_command(scratch.path(), &[]);
        assert_png(&output_path, (600, 600));
    }

    #[test]
    fn test_plot_command_is_deterministic() {
        let scratch = tempfile::tempdir().unwrap();
        run_command(scratch.path(), &["plot", "4", "--output", "first.png"]);
        run_command(scratch.path(), &["plot", "4", "-o", "second.png"]);

        let first = scratch.path().join("first.png");
        let second = scratch.path().join("second.png");
        assert_png(&first, (600, 600));
        assert_eq!(compute_file_hash(&first), compute_file_hash(&second));
    }

    #[test]
    fn test_plot_command_rejects_zero_roots() {
        let scratch = tempfile::tempdir().unwrap();
        let output = Command::new(env!("CARGO_BIN_EXE_cyclotomic-plotter"))
            .current_dir(scratch.path())
            .args(["plot", "0", "--output", "zero.png"])
            .output()
            .unwrap();
        assert!(!output.status.success());
        assert!(!scratch.path().join("zero.png").exists());
    }

    #[test]
    fn test_render_command_from_param_file() {
        let scratch = tempfile::tempdir().unwrap();
        let params_path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/param_files/roots_of_unity_tiny.json");
        run_command(scratch.path(), &["render", params_path.to_str().unwrap()]);

        let directory = scratch
            .path()
            .join("out/render/roots_of_unity_tiny/roots_of_unity");
        assert_png(&directory.join("roots_of_unity_tiny.png"), (96, 96));

        let diagnostics =
            std::fs::read_to_string(directory.join("roots_of_unity_tiny_diagnostics.txt")).unwrap();
        assert!(diagnostics.contains("6th Roots of Unity"));
        assert!(diagnostics.contains("Stopwatch"));

        let params: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(directory.join("roots_of_unity_tiny.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(params["root_count"], 6);
    }

    #[test]
    fn test_roots_command_prints_table() {
        let scratch = tempfile::tempdir().unwrap();
        let output = run_command(scratch.path(), &["roots", "3"]);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 4);
        assert!(stdout.contains("ζ^2"));
        assert!(stdout.contains("120.000"));
    }
}
