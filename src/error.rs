use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SignError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("failed to parse font")]
    /// [ab_glyph] failed to parse the font
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to encode the canvas
    Image(#[from] image::ImageError),

    #[error("no usable font found for families: {families}")]
    /// No installed font matched any of the requested families
    FontUnavailable { families: String },

    #[error("invalid colour string: {0:?}")]
    /// A colour string could not be parsed as `rrggbb` hex
    InvalidColour(String),
}
