/**
 * The canvas stores the figure in floating-point RGB, one column per `x` pixel, and
 * composites `Drawable` objects onto it with subpixel antialiasing. The coverage of
 * each pixel is estimated by testing a dense grid of sample points within the pixel.
 */
use nalgebra::Vector3;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::core::image_utils::{create_buffer, ImageSpecification, PixelMapper, ViewRectangle};

/**
 * Anything that occupies a region of the plot, described in "real" space rather than pixels.
 */
pub trait Drawable: Sync {
    /// Conservative rectangle that contains every point covered by the drawable.
    fn bounding_box(&self) -> ViewRectangle;

    /// True if the point (in real space) is inside the drawable.
    fn covers(&self, point: &nalgebra::Vector2<f64>) -> bool;

    fn color(&self) -> image::Rgb<u8>;
}

fn rgb_to_vector(color: image::Rgb<u8>) -> Vector3<f32> {
    Vector3::new(color[0] as f32, color[1] as f32, color[2] as f32)
}

pub struct Canvas {
    image_specification: ImageSpecification,
    pixel_mapper: PixelMapper,
    subpixel_offsets: Vec<nalgebra::Vector2<f64>>,
    data: Vec<Vec<Vector3<f32>>>, // [x][y]
}

impl Canvas {
    pub fn new(
        image_specification: &ImageSpecification,
        subpixel_antialiasing: u32,
        background_color: image::Rgb<u8>,
    ) -> Canvas {
        Canvas {
            image_specification: image_specification.clone(),
            pixel_mapper: PixelMapper::new(image_specification),
            subpixel_offsets: image_specification.subpixel_offset_vector(subpixel_antialiasing),
            data: create_buffer(
                rgb_to_vector(background_color),
                &image_specification.resolution,
            ),
        }
    }

    pub fn image_specification(&self) -> &ImageSpecification {
        &self.image_specification
    }

    /**
     * Blends the drawable onto the canvas. Each pixel moves toward the drawable color
     * by the fraction of its subpixel samples that the drawable covers.
     */
    pub fn draw<D: Drawable + ?Sized>(&mut self, drawable: &D) {
        let (x_range, y_range) = match self.pixel_mapper.pixel_bounds(&drawable.bounding_box()) {
            Some(bounds) => bounds,
            None => return,
        };

        let color = rgb_to_vector(drawable.color());
        let sample_scale = 1.0 / (self.subpixel_offsets.len() as f32);
        let pixel_mapper = &self.pixel_mapper;
        let offsets = &self.subpixel_offsets;
        let x_start = x_range.start as usize;

        self.data[x_range.start as usize..x_range.end as usize]
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, column)| {
                let x = (x_start + i) as u32;
                for y in y_range.clone() {
                    let pixel_center = pixel_mapper.map(&(x, y));
                    let hits = offsets
                        .iter()
                        .filter(|offset| drawable.covers(&(pixel_center + *offset)))
                        .count();
                    if hits > 0 {
                        let weight = sample_scale * (hits as f32);
                        let pixel = &mut column[y as usize];
                        *pixel = *pixel * (1.0 - weight) + color * weight;
                    }
                }
            });
    }

    pub fn draw_all(&mut self, drawables: &[Box<dyn Drawable>]) {
        for drawable in drawables {
            self.draw(drawable.as_ref());
        }
    }

    pub fn to_image(&self) -> image::RgbImage {
        let resolution = self.image_specification.resolution;
        image::RgbImage::from_fn(resolution[0], resolution[1], |x, y| {
            let color = self.data[x as usize][y as usize];
            image::Rgb([
                color[0].round().clamp(0.0, 255.0) as u8,
                color[1].round().clamp(0.0, 255.0) as u8,
                color[2].round().clamp(0.0, 255.0) as u8,
            ])
        })
    }
}
