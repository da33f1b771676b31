//! Text rendering for titles and annotations, built on the 8x8 bitmap glyphs from the
//! `font8x8` crate. Each font pixel is a square cell in real space, so text scales with
//! the rest of the figure and gets the same antialiasing as every other drawable.

use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS};

use crate::core::canvas::Drawable;
use crate::core::error::PlotError;
use crate::core::image_utils::ViewRectangle;

pub const GLYPH_CELLS: usize = 8;

pub fn glyph_bitmap(c: char) -> Result<[u8; GLYPH_CELLS], PlotError> {
    BASIC_FONTS
        .get(c)
        .or_else(|| GREEK_FONTS.get(c))
        .ok_or(PlotError::UnsupportedGlyph(c))
}

/**
 * A single line of glyphs, all at the same size, anchored at its top-left corner.
 */
#[derive(Debug, Clone)]
pub struct GlyphRun {
    pub top_left: nalgebra::Vector2<f64>,
    pub cell_size: f64,
    pub glyphs: Vec<[u8; GLYPH_CELLS]>,
    pub color_rgb: [u8; 3],
}

impl GlyphRun {
    pub fn new(
        text: &str,
        top_left: nalgebra::Vector2<f64>,
        height: f64,
        color_rgb: [u8; 3],
    ) -> Result<GlyphRun, PlotError> {
        Ok(GlyphRun {
            top_left,
            cell_size: height / (GLYPH_CELLS as f64),
            glyphs: text.chars().map(glyph_bitmap).collect::<Result<_, _>>()?,
            color_rgb,
        })
    }

    pub fn width(&self) -> f64 {
        (self.glyphs.len() * GLYPH_CELLS) as f64 * self.cell_size
    }

    pub fn height(&self) -> f64 {
        GLYPH_CELLS as f64 * self.cell_size
    }
}

impl Drawable for GlyphRun {
    fn bounding_box(&self) -> ViewRectangle {
        let half_size = 0.5 * nalgebra::Vector2::new(self.width(), self.height());
        let center = self.top_left + nalgebra::Vector2::new(half_size[0], -half_size[1]);
        ViewRectangle::from_center_and_half_size(center, half_size)
    }

    fn covers(&self, point: &nalgebra::Vector2<f64>) -> bool {
        let u = (point[0] - self.top_left[0]) / self.cell_size;
        let v = (self.top_left[1] - point[1]) / self.cell_size;
        if u < 0.0 || v < 0.0 {
            return false;
        }
        let (column, row) = (u as usize, v as usize);
        if row >= GLYPH_CELLS {
            return false;
        }
        match self.glyphs.get(column / GLYPH_CELLS) {
            // Bit zero is the leftmost cell of the row.
            Some(glyph) => glyph[row] & (1 << (column % GLYPH_CELLS)) != 0,
            None => false,
        }
    }

    fn color(&self) -> image::Rgb<u8> {
        image::Rgb(self.color_rgb)
    }
}

/**
 * Piece of a label that shares a size and vertical offset. Both `scale` and `raise`
 * are relative to the nominal height of the label.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub scale: f64,
    pub raise: f64,
}

impl TextSpan {
    pub fn normal(text: impl Into<String>) -> TextSpan {
        TextSpan {
            text: text.into(),
            scale: 1.0,
            raise: 0.0,
        }
    }

    pub fn superscript(text: impl Into<String>) -> TextSpan {
        TextSpan {
            text: text.into(),
            scale: 0.6,
            raise: 0.55,
        }
    }

    fn is_superscript(&self) -> bool {
        self.raise > 0.0
    }
}

/**
 * Text annotation centered (horizontally and vertically) on a point in real space.
 */
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub spans: Vec<TextSpan>,
    pub center: nalgebra::Vector2<f64>,
    pub height: f64,
    pub color_rgb: [u8; 3],
}

impl TextLabel {
    /// Plain-text form, with `^` marking the start of each superscript.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|span| {
                if span.is_superscript() {
                    format!("^{}", span.text)
                } else {
                    span.text.clone()
                }
            })
            .collect()
    }

    pub fn width(&self) -> f64 {
        self.spans
            .iter()
            .map(|span| span.text.chars().count() as f64 * span.scale * self.height)
            .sum()
    }

    /**
     * Splits the label into one glyph run per span, positioned so that the bounding box of
     * the whole label is centered on `self.center`.
     */
    pub fn layout(&self) -> Result<Vec<GlyphRun>, PlotError> {
        // Vertical extent relative to the bottom of the nominal line.
        let bottom = self
            .spans
            .iter()
            .map(|span| span.raise * self.height)
            .fold(0.0_f64, f64::min);
        let top = self
            .spans
            .iter()
            .map(|span| (span.raise + span.scale) * self.height)
            .fold(self.height, f64::max);

        let line_bottom = self.center[1] - 0.5 * (top - bottom) - bottom;
        let mut cursor = self.center[0] - 0.5 * self.width();
        let mut runs = Vec::with_capacity(self.spans.len());
        for span in self.spans.iter() {
            let span_height = span.scale * self.height;
            let top_left = nalgebra::Vector2::new(
                cursor,
                line_bottom + span.raise * self.height + span_height,
            );
            let run = GlyphRun::new(&span.text, top_left, span_height, self.color_rgb)?;
            cursor += run.width();
            runs.push(run);
        }
        Ok(runs)
    }
}
