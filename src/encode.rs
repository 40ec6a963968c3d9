//! Boundary encoding: PNG bytes and base64 data URIs.
//!
//! The render and remap paths deal only in raw RGBA images; this module is
//! the single place that knows about the transport encoding.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};

use crate::{Error, Result};

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::ImageProcessing(format!("PNG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}

/// Encode an RGBA image as a `data:image/png;base64,…` URI, the format the
/// API returns to browsers.
pub fn png_data_uri(image: &RgbaImage) -> Result<String> {
    let png = encode_png(image)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
