use thiserror::Error;

/**
 * Everything that can go wrong between reading the parameters and writing
 * the final image to disk.
 */
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("root count must be a positive integer, got {0}")]
    InvalidRootCount(u32),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("no bitmap glyph available for character {0:?}")]
    UnsupportedGlyph(char),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PlotError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> PlotError {
        PlotError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
