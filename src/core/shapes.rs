use serde::{Deserialize, Serialize};

use crate::core::canvas::Drawable;
use crate::core::image_utils::ViewRectangle;

/// Filled circle, used for the scatter markers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Disk {
    pub center: nalgebra::Vector2<f64>,
    pub radius: f64,
    pub color_rgb: [u8; 3],
}

impl Drawable for Disk {
    fn bounding_box(&self) -> ViewRectangle {
        ViewRectangle::from_center_and_half_size(
            self.center,
            nalgebra::Vector2::new(self.radius, self.radius),
        )
    }

    fn covers(&self, point: &nalgebra::Vector2<f64>) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    fn color(&self) -> image::Rgb<u8> {
        image::Rgb(self.color_rgb)
    }
}

/// Circular line of constant width, used for the axis frame and the radial grid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ring {
    pub center: nalgebra::Vector2<f64>,
    pub radius: f64,
    pub line_width: f64,
    pub color_rgb: [u8; 3],
}

impl Drawable for Ring {
    fn bounding_box(&self) -> ViewRectangle {
        let half_size = self.radius + 0.5 * self.line_width;
        ViewRectangle::from_center_and_half_size(
            self.center,
            nalgebra::Vector2::new(half_size, half_size),
        )
    }

    fn covers(&self, point: &nalgebra::Vector2<f64>) -> bool {
        ((point - self.center).norm() - self.radius).abs() <= 0.5 * self.line_width
    }

    fn color(&self) -> image::Rgb<u8> {
        image::Rgb(self.color_rgb)
    }
}
