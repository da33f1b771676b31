use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

use crate::core::error::PlotError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ImageSpecification {
    pub resolution: nalgebra::Vector2<u32>,
    pub center: nalgebra::Vector2<f64>,
    pub width: f64,
}

/**
 * Used to fully-specify both an image resolution and how it is anchored into the "real"
 * space in which the plot lives. The height in "real" space is derived from the aspect
 * ratio of the image and the specified width.
 */
impl ImageSpecification {
    pub fn height(&self) -> f64 {
        self.width * (self.resolution[1] as f64) / (self.resolution[0] as f64)
    }

    /// Distance between the sample points of adjacent pixels in real space.
    pub fn pixel_size(&self) -> f64 {
        self.width / ((self.resolution[0] - 1) as f64)
    }

    /**
     * Used for anti-aliasing. Computes a grid of `n * n` offsets, centered on zero, that
     * tile a single pixel. Adding these to the pixel center yields the subpixel samples.
     */
    pub fn subpixel_offset_vector(&self, n: u32) -> Vec<nalgebra::Vector2<f64>> {
        assert!(n > 0);
        let mut offsets = Vec::with_capacity((n * n) as usize);
        let step = 1.0 / n as f64;
        let pixel_size = self.pixel_size();

        for i in 0..n {
            let x = (step * (i as f64 + 0.5) - 0.5) * pixel_size; // (-0.5, 0.5) pixel
            for j in 0..n {
                let y = (step * (j as f64 + 0.5) - 0.5) * pixel_size;
                offsets.push(nalgebra::Vector2::new(x, y));
            }
        }

        offsets
    }
}

pub fn create_buffer<T: Clone>(value: T, resolution: &nalgebra::Vector2<u32>) -> Vec<Vec<T>> {
    vec![vec![value; resolution[1] as usize]; resolution[0] as usize]
}

/**
 * Describes a rectangular region in space.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewRectangle {
    pub center: nalgebra::Vector2<f64>,
    pub dimensions: nalgebra::Vector2<f64>,
}

impl ViewRectangle {
    pub fn from_vertices(vertices: &[nalgebra::Vector2<f64>]) -> ViewRectangle {
        assert!(!vertices.is_empty());

        let mut min_corner = vertices[0];
        let mut max_corner = vertices[0];

        for vertex in vertices.iter() {
            min_corner = min_corner.inf(vertex);
            max_corner = max_corner.sup(vertex);
        }

        let center = 0.5 * (min_corner + max_corner);
        let dimensions = max_corner - min_corner;

        ViewRectangle { center, dimensions }
    }

    pub fn from_center_and_half_size(
        center: nalgebra::Vector2<f64>,
        half_size: nalgebra::Vector2<f64>,
    ) -> ViewRectangle {
        ViewRectangle {
            center,
            dimensions: 2.0 * half_size,
        }
    }

    pub fn min_corner(&self) -> nalgebra::Vector2<f64> {
        self.center - 0.5 * self.dimensions
    }

    pub fn max_corner(&self) -> nalgebra::Vector2<f64> {
        self.center + 0.5 * self.dimensions
    }
}

/**
 * Allows the user to specify only the resolution of the image and how much "extra space" to leave
 * around the subject in the image. The real coordinates are derived automatically from the
 * extent of the figure.
 *
 * The `FitImage` can then be converted into a full `ImageSpecification` to be passed into other code.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FitImage {
    pub resolution: nalgebra::Vector2<u32>,
    pub padding_scale: f64,
}

impl FitImage {
    pub fn image_specification(&self, view_rectangle: &ViewRectangle) -> ImageSpecification {
        let pixel_height = self.resolution[1] as f64;
        let pixel_width = self.resolution[0] as f64;
        let dims_height = view_rectangle.dimensions[1];
        let dims_width = view_rectangle.dimensions[0];

        let aspect_ratio = pixel_height / pixel_width; // of the rendered image
        let selected_width = if aspect_ratio > (dims_height / dims_width) {
            dims_width
        } else {
            dims_height / aspect_ratio
        };

        ImageSpecification {
            resolution: self.resolution,
            center: view_rectangle.center,
            width: self.padding_scale * selected_width,
        }
    }
}

#[derive(Clone, Debug)]
/**
 * Used to map from image space into the "regular" domain of the plot.
 */
pub struct LinearPixelMap {
    offset: f64,
    slope: f64,
}

impl LinearPixelMap {
    /**
     * @param n: number of pixels spanned by [x0,x1]
     * @param x0: output of the map at 0
     * @param x1: output of the map at n-1
     */
    pub fn new(n: u32, x0: f64, x1: f64) -> LinearPixelMap {
        assert!(n > 1);
        let offset = x0;
        let slope = (x1 - x0) / ((n - 1) as f64);
        LinearPixelMap { offset, slope }
    }

    pub fn new_from_center_and_width(n: u32, center: f64, width: f64) -> LinearPixelMap {
        LinearPixelMap::new(n, center - 0.5 * width, center + 0.5 * width)
    }

    // Map from pixel (integer) to point (float)
    pub fn map(&self, index: u32) -> f64 {
        self.offset + self.slope * (index as f64)
    }

    // Maps from point to the pixel whose sample point is nearest.
    pub fn inverse_map(&self, point: f64) -> i64 {
        ((point - self.offset) / self.slope).round() as i64
    }
}

#[derive(Clone, Debug)]
pub struct PixelMapper {
    width: LinearPixelMap,
    height: LinearPixelMap,
    resolution: nalgebra::Vector2<u32>,
}

impl PixelMapper {
    pub fn new(image_specification: &ImageSpecification) -> PixelMapper {
        PixelMapper {
            width: LinearPixelMap::new_from_center_and_width(
                image_specification.resolution[0],
                image_specification.center[0],
                image_specification.width,
            ),
            height: LinearPixelMap::new_from_center_and_width(
                image_specification.resolution[1],
                image_specification.center[1],
                -image_specification.height(), // Image coordinates are upside down.
            ),
            resolution: image_specification.resolution,
        }
    }

    pub fn inverse_map(&self, point: &nalgebra::Vector2<f64>) -> (i64, i64) {
        (
            self.width.inverse_map(point[0]),
            self.height.inverse_map(point[1]),
        )
    }

    pub fn map(&self, pixel: &(u32, u32)) -> nalgebra::Vector2<f64> {
        let (x, y) = pixel;
        nalgebra::Vector2::new(self.width.map(*x), self.height.map(*y))
    }

    /**
     * Range of pixel indices (x, y) that could be touched by anything inside of the
     * rectangle, padded by one pixel and clipped to the image. Returns `None` when
     * the rectangle lies entirely off the image.
     */
    pub fn pixel_bounds(&self, rectangle: &ViewRectangle) -> Option<(Range<u32>, Range<u32>)> {
        let (x_a, y_a) = self.inverse_map(&rectangle.min_corner());
        let (x_b, y_b) = self.inverse_map(&rectangle.max_corner());
        let clip = |a: i64, b: i64, n: u32| -> Option<Range<u32>> {
            let low = a.min(b) - 1;
            let upp = a.max(b) + 2;
            let low = low.max(0);
            let upp = upp.min(n as i64);
            if low >= upp {
                None
            } else {
                Some(low as u32..upp as u32)
            }
        };
        Some((
            clip(x_a, x_b, self.resolution[0])?,
            clip(y_a, y_b, self.resolution[1])?,
        ))
    }
}

/**
 * Writes an image to disk, inferring the format from the file extension, and logs the
 * location of the file on success.
 */
pub fn write_image_to_file(image: &image::RgbImage, path: &Path) -> Result<(), PlotError> {
    image.save(path)?;
    tracing::info!("Wrote image file to: {}", path.display());
    Ok(())
}
