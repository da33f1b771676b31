use serde::{Deserialize, Serialize};

use crate::core::canvas::Drawable;
use crate::core::shapes::Ring;

/// Point given by angle (radians, counter-clockwise from the positive x axis) and radius.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub angle: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn new(angle: f64, radius: f64) -> PolarPoint {
        PolarPoint { angle, radius }
    }

    pub fn to_cartesian(&self) -> nalgebra::Vector2<f64> {
        self.radius * nalgebra::Vector2::new(self.angle.cos(), self.angle.sin())
    }
}

/**
 * Polar coordinate frame centered on the origin: a circular frame at `frame_radius`
 * and concentric gridlines at each of the `radial_gridlines`. Tick labels and
 * angular spokes are never drawn.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PolarAxes {
    pub frame_radius: f64,
    pub radial_gridlines: Vec<f64>,
    pub line_width: f64,
    pub frame_color_rgb: [u8; 3],
    pub grid_color_rgb: [u8; 3],
}

impl PolarAxes {
    /// Gridlines first, so that the frame is drawn on top of them.
    pub fn drawables(&self) -> Vec<Box<dyn Drawable>> {
        let mut drawables: Vec<Box<dyn Drawable>> = self
            .radial_gridlines
            .iter()
            .filter(|&&radius| radius > 0.0 && radius < self.frame_radius)
            .map(|&radius| -> Box<dyn Drawable> {
                Box::new(Ring {
                    center: nalgebra::Vector2::zeros(),
                    radius,
                    line_width: 0.5 * self.line_width,
                    color_rgb: self.grid_color_rgb,
                })
            })
            .collect();

        drawables.push(Box::new(Ring {
            center: nalgebra::Vector2::zeros(),
            radius: self.frame_radius,
            line_width: self.line_width,
            color_rgb: self.frame_color_rgb,
        }));
        drawables
    }
}
