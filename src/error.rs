use thiserror::Error;

/// Errors that can occur while constructing the drawing surfaces
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Errors produced when a color string is not of the form `#RRGGBB`
#[derive(Error, Debug)]
pub enum ColorParseError {
    #[error("malformed hex color {0:?}, expected \"#RRGGBB\"")]
    Malformed(String),
}

/// Errors that can occur while exporting the ink surface to an image file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("pixel buffer size does not match surface dimensions")]
    BufferMismatch,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
