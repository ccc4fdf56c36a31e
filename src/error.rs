use thiserror::Error;

/// Errors from operations around the codec (bar parsing, rendering, file output)
#[derive(Debug, Error)]
pub enum Rm4Error {
    /// Symbol is not one of `A`, `D`, `F`, `T` or `S`
    #[error("unrecognised bar symbol {0:?}")]
    InvalidBar(char),
    /// Render geometry produced a zero-sized image
    #[error("render canvas has zero width or height")]
    EmptyCanvas,
    /// Render geometry exceeds the addressable or allowed image size
    #[error("render canvas is too large")]
    CanvasTooLarge,
    /// Image encoding or file write failed
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}
