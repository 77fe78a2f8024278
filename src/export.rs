//! JPEG export of the ink surface.
//!
//! A pure, point-in-time read of the pixel content: whatever was committed
//! or cleared last is exactly what ends up in the file. The preview overlay
//! is never part of an export.

use std::fs;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use tiny_skia::Pixmap;

use crate::error::ExportError;

/// File name the save button writes to, in the working directory.
pub const EXPORT_FILE: &str = "inkboard.jpg";

const JPEG_QUALITY: u8 = 90;

/// Encodes the surface's current pixels as JPEG bytes.
///
/// The ink surface is opaque by construction, so demultiplying and dropping
/// alpha loses nothing.
pub fn encode_jpeg(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (pixmap.width(), pixmap.height());

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }

    let img = image::RgbImage::from_raw(width, height, rgb)
        .ok_or(ExportError::BufferMismatch)?;

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    img.write_with_encoder(encoder)?;
    Ok(bytes)
}

/// Encodes the surface and writes it to `path`.
pub fn save_jpeg(pixmap: &Pixmap, path: &Path) -> Result<(), ExportError> {
    let bytes = encode_jpeg(pixmap)?;
    fs::write(path, &bytes)?;
    log::info!(
        "exported {}x{} drawing ({} bytes) to {}",
        pixmap.width(),
        pixmap.height(),
        bytes.len(),
        path.display()
    );
    Ok(())
}
