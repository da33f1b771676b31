//! The r-th roots of unity, drawn as markers on a polar plot and labeled with their
//! exponent with respect to the primitive root ζ = e^(2πi/r).

use std::f64::consts::PI;
use std::io::Write;
use std::path::Path;

use iter_num_tools::lin_space;
use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::core::canvas::{Canvas, Drawable};
use crate::core::error::PlotError;
use crate::core::file_io::FilePrefix;
use crate::core::image_utils::{write_image_to_file, FitImage, ImageSpecification, ViewRectangle};
use crate::core::polar::{PolarAxes, PolarPoint};
use crate::core::shapes::Disk;
use crate::core::stopwatch::Stopwatch;
use crate::core::text::{TextLabel, TextSpan};

pub const DEFAULT_ROOT_COUNT: u32 = 12;
pub const DEFAULT_OUTPUT_FILE: &str = "cyclotomic_roots.png";

/// Name of the primitive root used in the marker labels.
pub const PRIMITIVE_ROOT_SYMBOL: &str = "ζ";

/**
 * Complete set of parameters that are fed in from the JSON for the roots of unity plot.
 * Lengths (radii, heights, line widths) are all in the units of the polar plot, where the
 * roots themselves lie on the unit circle.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RootsOfUnityParams {
    pub root_count: u32,
    pub fit_image: FitImage,
    pub subpixel_antialiasing: u32,
    pub title: Option<String>, // derived from `root_count` when not set
    pub title_height: f64,
    pub label_radius: f64,
    pub label_height: f64,
    pub marker_radius: f64,
    pub marker_color_rgb: [u8; 3],
    pub axes: PolarAxes,
    pub background_color_rgb: [u8; 3],
    pub text_color_rgb: [u8; 3],
}

impl RootsOfUnityParams {
    pub fn with_root_count(root_count: u32) -> RootsOfUnityParams {
        RootsOfUnityParams {
            root_count,
            fit_image: FitImage {
                resolution: nalgebra::Vector2::new(600, 600),
                padding_scale: 1.08,
            },
            subpixel_antialiasing: 3,
            title: None,
            title_height: 0.12,
            label_radius: 1.1,
            label_height: 0.09,
            marker_radius: 0.035,
            marker_color_rgb: [0, 0, 255],
            axes: PolarAxes {
                frame_radius: 1.25,
                radial_gridlines: vec![0.25, 0.5, 0.75, 1.0],
                line_width: 0.008,
                frame_color_rgb: [0, 0, 0],
                grid_color_rgb: [176, 176, 176],
            },
            background_color_rgb: [255, 255, 255],
            text_color_rgb: [0, 0, 0],
        }
    }

    pub fn title_text(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => default_title(self.root_count),
        }
    }

    pub fn validate(&self) -> Result<(), PlotError> {
        if self.root_count == 0 {
            return Err(PlotError::InvalidRootCount(self.root_count));
        }
        let resolution = self.fit_image.resolution;
        if resolution[0] < 2 || resolution[1] < 2 {
            return Err(PlotError::invalid_parameter(
                "fit_image.resolution",
                format!("need at least 2x2 pixels, got {}x{}", resolution[0], resolution[1]),
            ));
        }
        if !(1..=16).contains(&self.subpixel_antialiasing) {
            return Err(PlotError::invalid_parameter(
                "subpixel_antialiasing",
                format!("must be on [1, 16], got {}", self.subpixel_antialiasing),
            ));
        }
        for (name, value) in [
            ("fit_image.padding_scale", self.fit_image.padding_scale),
            ("title_height", self.title_height),
            ("label_radius", self.label_radius),
            ("label_height", self.label_height),
            ("marker_radius", self.marker_radius),
            ("axes.frame_radius", self.axes.frame_radius),
            ("axes.line_width", self.axes.line_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlotError::invalid_parameter(
                    name,
                    format!("must be positive and finite, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

impl Default for RootsOfUnityParams {
    fn default() -> Self {
        RootsOfUnityParams::with_root_count(DEFAULT_ROOT_COUNT)
    }
}

/**
 * The arguments of the r-th roots of unity: `r` angles evenly spaced on [0, 2π), starting
 * at zero. The endpoint is excluded so that the last root does not coincide with the first.
 */
pub fn root_angles(root_count: u32) -> Vec<f64> {
    lin_space(0.0..(2.0 * PI), root_count as usize).collect()
}

pub fn roots_of_unity(root_count: u32) -> Vec<Complex64> {
    root_angles(root_count)
        .into_iter()
        .map(|angle| Complex64::from_polar(1.0, angle))
        .collect()
}

/// Plain-text label of the root at `index`, e.g. "ζ^3".
pub fn root_label(index: usize) -> String {
    format!("{}^{}", PRIMITIVE_ROOT_SYMBOL, index)
}

pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn default_title(root_count: u32) -> String {
    format!("{}{} Roots of Unity", root_count, ordinal_suffix(root_count))
}

/**
 * Everything needed to draw the plot, fully laid out in real space. Building the figure
 * does no rendering, so the geometry can be inspected independently of the image.
 */
pub struct Figure {
    pub image_specification: ImageSpecification,
    pub markers: Vec<PolarPoint>,
    pub labels: Vec<TextLabel>,
    pub title: TextLabel,
    pub drawables: Vec<Box<dyn Drawable>>, // in draw order
}

pub fn build_figure(params: &RootsOfUnityParams) -> Result<Figure, PlotError> {
    params.validate()?;

    let angles = root_angles(params.root_count);
    let markers: Vec<PolarPoint> = angles
        .iter()
        .map(|&angle| PolarPoint::new(angle, 1.0))
        .collect();

    let labels: Vec<TextLabel> = angles
        .iter()
        .enumerate()
        .map(|(index, &angle)| TextLabel {
            spans: vec![
                TextSpan::normal(PRIMITIVE_ROOT_SYMBOL),
                TextSpan::superscript(index.to_string()),
            ],
            center: PolarPoint::new(angle, params.label_radius).to_cartesian(),
            height: params.label_height,
            color_rgb: params.text_color_rgb,
        })
        .collect();

    let axes_top = params.axes.frame_radius + 0.5 * params.axes.line_width;
    let title = TextLabel {
        spans: vec![TextSpan::normal(params.title_text())],
        center: nalgebra::Vector2::new(0.0, axes_top + params.title_height),
        height: params.title_height,
        color_rgb: params.text_color_rgb,
    };

    let mut drawables = params.axes.drawables();
    for marker in markers.iter() {
        drawables.push(Box::new(Disk {
            center: marker.to_cartesian(),
            radius: params.marker_radius,
            color_rgb: params.marker_color_rgb,
        }));
    }
    for label in labels.iter().chain(std::iter::once(&title)) {
        for run in label.layout()? {
            drawables.push(Box::new(run));
        }
    }

    // Fit the image around everything that gets drawn, keeping the plot centered.
    let mut corners = Vec::with_capacity(2 * drawables.len());
    for drawable in drawables.iter() {
        let bounds = drawable.bounding_box();
        corners.push(bounds.min_corner());
        corners.push(bounds.max_corner());
    }
    let extent = ViewRectangle::from_vertices(&corners);
    let half_width = extent.min_corner()[0].abs().max(extent.max_corner()[0].abs());
    let view = ViewRectangle::from_vertices(&[
        nalgebra::Vector2::new(-half_width, extent.min_corner()[1]),
        nalgebra::Vector2::new(half_width, extent.max_corner()[1]),
    ]);

    Ok(Figure {
        image_specification: params.fit_image.image_specification(&view),
        markers,
        labels,
        title,
        drawables,
    })
}

pub fn render_to_buffer(params: &RootsOfUnityParams) -> Result<image::RgbImage, PlotError> {
    let figure = build_figure(params)?;
    let mut canvas = Canvas::new(
        &figure.image_specification,
        params.subpixel_antialiasing,
        image::Rgb(params.background_color_rgb),
    );
    canvas.draw_all(&figure.drawables);
    Ok(canvas.to_image())
}

/// Renders the plot and writes it to `output_path`, replacing any existing file.
pub fn render_to_path(params: &RootsOfUnityParams, output_path: &Path) -> Result<(), PlotError> {
    tracing::info!(
        root_count = params.root_count,
        "Rendering {}",
        params.title_text()
    );
    for (index, root) in roots_of_unity(params.root_count).iter().enumerate() {
        tracing::debug!(label = %root_label(index), re = root.re, im = root.im, "root");
    }
    let image = render_to_buffer(params)?;
    write_image_to_file(&image, output_path)
}

/**
 * Plot the `root_count`-th roots of unity with the default styling and save the image.
 */
pub fn render(root_count: u32, output_path: &Path) -> Result<(), PlotError> {
    render_to_path(&RootsOfUnityParams::with_root_count(root_count), output_path)
}

/**
 * Called by the `render` command, for plots described by a parameter file. Writes the image
 * along with a diagnostics file (timing) and a copy of the parameters.
 */
pub fn render_roots_of_unity(
    params: &RootsOfUnityParams,
    file_prefix: &FilePrefix,
) -> Result<(), PlotError> {
    let mut stopwatch = Stopwatch::new("Roots of Unity Stopwatch".to_owned());

    let figure = build_figure(params)?;
    stopwatch.record_split("build_figure".to_owned());

    let mut canvas = Canvas::new(
        &figure.image_specification,
        params.subpixel_antialiasing,
        image::Rgb(params.background_color_rgb),
    );
    canvas.draw_all(&figure.drawables);
    stopwatch.record_split("rasterize".to_owned());

    write_image_to_file(&canvas.to_image(), &file_prefix.full_path_with_suffix(".png"))?;
    stopwatch.record_split("write_png".to_owned());

    let mut params_file = file_prefix.create_file_with_suffix(".json")?;
    serde_json::to_writer_pretty(&mut params_file, params)?;
    params_file.flush()?;

    let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt")?;
    writeln!(diagnostics_file, "{}", params.title_text())?;
    writeln!(diagnostics_file, "root count: {}", params.root_count)?;
    writeln!(
        diagnostics_file,
        "resolution: {} x {}",
        figure.image_specification.resolution[0], figure.image_specification.resolution[1]
    )?;
    writeln!(diagnostics_file, "drawables: {}", figure.drawables.len())?;
    stopwatch.display(&mut diagnostics_file)?;
    diagnostics_file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use more_asserts::{assert_ge, assert_gt, assert_lt};

    fn assert_evenly_spaced(root_count: u32) {
        let angles = root_angles(root_count);
        assert_eq!(angles.len(), root_count as usize);
        assert_eq!(angles[0], 0.0);

        let spacing = 2.0 * PI / (root_count as f64);
        for pair in angles.windows(2) {
            assert_gt!(pair[1], pair[0]);
            assert_relative_eq!(pair[1] - pair[0], spacing, epsilon = 1e-12);
        }
        for angle in angles.iter() {
            assert_ge!(*angle, 0.0);
            assert_lt!(*angle, 2.0 * PI);
        }
        // Wrap around from the last root back to the first.
        let last = angles[angles.len() - 1];
        assert_relative_eq!(2.0 * PI - last, spacing, epsilon = 1e-12);
    }

    #[test]
    fn test_root_angles_are_evenly_spaced() {
        for root_count in 1..=40 {
            assert_evenly_spaced(root_count);
        }
        assert_evenly_spaced(997);
    }

    #[test]
    fn test_single_root() {
        assert_eq!(root_angles(1), vec![0.0]);
        let figure = build_figure(&RootsOfUnityParams::with_root_count(1)).unwrap();
        assert_eq!(figure.markers.len(), 1);
        assert_eq!(figure.labels.len(), 1);
        assert_eq!(figure.labels[0].plain_text(), "ζ^0");
    }

    #[test]
    fn test_four_roots() {
        let angles = root_angles(4);
        let expected = [0.0, 0.5 * PI, PI, 1.5 * PI];
        assert_eq!(angles.len(), expected.len());
        for (angle, soln) in angles.iter().zip(expected.iter()) {
            assert_relative_eq!(*angle, *soln, epsilon = 1e-12);
        }

        let figure = build_figure(&RootsOfUnityParams::with_root_count(4)).unwrap();
        let labels: Vec<String> = figure.labels.iter().map(|l| l.plain_text()).collect();
        assert_eq!(labels, vec!["ζ^0", "ζ^1", "ζ^2", "ζ^3"]);
    }

    #[test]
    fn test_twelve_roots_are_thirty_degrees_apart() {
        let angles = root_angles(DEFAULT_ROOT_COUNT);
        assert_eq!(angles.len(), 12);
        for (i, angle) in angles.iter().enumerate() {
            assert_relative_eq!(angle.to_degrees(), 30.0 * i as f64, epsilon = 1e-9);
        }
        assert_eq!(root_label(11), "ζ^11");
        assert_eq!(DEFAULT_OUTPUT_FILE, "cyclotomic_roots.png");
        assert_eq!(RootsOfUnityParams::default().title_text(), "12th Roots of Unity");
    }

    #[test]
    fn test_root_angles_are_deterministic() {
        assert_eq!(root_angles(12), root_angles(12));
        assert_eq!(root_angles(7), root_angles(7));
    }

    #[test]
    fn test_roots_of_unity_satisfy_definition() {
        for root_count in [1_u32, 2, 3, 5, 12] {
            for root in roots_of_unity(root_count) {
                assert_relative_eq!(root.norm(), 1.0, epsilon = 1e-12);
                let power = root.powu(root_count);
                assert_relative_eq!(power.re, 1.0, epsilon = 1e-9);
                assert_relative_eq!(power.im, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_ordinal_titles() {
        assert_eq!(default_title(1), "1st Roots of Unity");
        assert_eq!(default_title(2), "2nd Roots of Unity");
        assert_eq!(default_title(3), "3rd Roots of Unity");
        assert_eq!(default_title(4), "4th Roots of Unity");
        assert_eq!(default_title(11), "11th Roots of Unity");
        assert_eq!(default_title(12), "12th Roots of Unity");
        assert_eq!(default_title(13), "13th Roots of Unity");
        assert_eq!(default_title(21), "21st Roots of Unity");
        assert_eq!(default_title(112), "112th Roots of Unity");
        assert_eq!(default_title(122), "122nd Roots of Unity");

        let mut params = RootsOfUnityParams::with_root_count(5);
        params.title = Some(String::from("Pentagon"));
        assert_eq!(params.title_text(), "Pentagon");
    }

    #[test]
    fn test_zero_roots_is_rejected() {
        let params = RootsOfUnityParams::with_root_count(0);
        assert!(matches!(
            params.validate(),
            Err(PlotError::InvalidRootCount(0))
        ));
        assert!(build_figure(&params).is_err());
    }

    #[test]
    fn test_invalid_style_parameters_are_rejected() {
        let mut params = RootsOfUnityParams::default();
        params.marker_radius = -1.0;
        assert!(matches!(
            params.validate(),
            Err(PlotError::InvalidParameter {
                name: "marker_radius",
                ..
            })
        ));

        let mut params = RootsOfUnityParams::default();
        params.fit_image.resolution = nalgebra::Vector2::new(1, 100);
        assert!(params.validate().is_err());

        let mut params = RootsOfUnityParams::default();
        params.subpixel_antialiasing = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_figure_layout() {
        let params = RootsOfUnityParams::with_root_count(6);
        let figure = build_figure(&params).unwrap();

        for (index, (marker, label)) in figure.markers.iter().zip(figure.labels.iter()).enumerate() {
            assert_relative_eq!(marker.radius, 1.0);
            // Each label sits just outside of its own marker.
            let expected = PolarPoint::new(marker.angle, params.label_radius).to_cartesian();
            assert_relative_eq!(label.center[0], expected[0], epsilon = 1e-12);
            assert_relative_eq!(label.center[1], expected[1], epsilon = 1e-12);
            assert_eq!(label.plain_text(), root_label(index));
        }

        // Title sits above the frame, and the whole figure fits in the image.
        assert_gt!(figure.title.center[1], params.axes.frame_radius);
        let spec = &figure.image_specification;
        assert_eq!(spec.resolution, params.fit_image.resolution);
        assert_relative_eq!(spec.center[0], 0.0, epsilon = 1e-12);
        assert_gt!(0.5 * spec.width, params.axes.frame_radius);
        assert_gt!(
            spec.center[1] + 0.5 * spec.height(),
            figure.title.center[1] + 0.5 * params.title_height
        );
    }

    #[test]
    fn test_render_to_buffer_draws_markers() {
        let mut params = RootsOfUnityParams::with_root_count(4);
        params.fit_image.resolution = nalgebra::Vector2::new(120, 120);
        params.subpixel_antialiasing = 2;
        params.label_height = 0.05;
        let figure = build_figure(&params).unwrap();
        let image = render_to_buffer(&params).unwrap();
        assert_eq!(image.dimensions(), (120, 120));

        let mapper = crate::core::image_utils::PixelMapper::new(&figure.image_specification);
        for marker in figure.markers.iter() {
            let (x, y) = mapper.inverse_map(&marker.to_cartesian());
            assert_eq!(
                *image.get_pixel(x as u32, y as u32),
                image::Rgb(params.marker_color_rgb)
            );
        }
        // Plot origin is empty.
        let (x, y) = mapper.inverse_map(&nalgebra::Vector2::zeros());
        assert_eq!(
            *image.get_pixel(x as u32, y as u32),
            image::Rgb(params.background_color_rgb)
        );
    }
}
