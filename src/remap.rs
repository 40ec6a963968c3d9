//! Colour remapping: derive the black seal variant from the white one.

use image::RgbaImage;

use crate::{Error, Result};

/// Remap every opaque pure-white pixel to opaque black, leaving all other
/// pixels (including fully transparent white) untouched.
///
/// Pure function: the input is never mutated; a fresh image is returned.
/// Runs as a bulk transform over the raw channel buffer.
///
/// The threshold is exact equality on 255 per colour channel. The renderer
/// pins glyph colour to pure white and only fully-covered interiors
/// composite back to exactly (255,255,255,255), so this catches the glyph
/// body. Known limitation: anti-aliased glyph edges blend with the template
/// and are not exactly white, so they are left unchanged rather than
/// remapped.
pub fn remap_white_to_black(image: &RgbaImage) -> Result<RgbaImage> {
    let mut buf = image.as_raw().clone();
    for px in buf.chunks_exact_mut(4) {
        if px[0] == 255 && px[1] == 255 && px[2] == 255 && px[3] != 0 {
            px.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    RgbaImage::from_raw(image.width(), image.height(), buf).ok_or_else(|| {
        Error::ImageProcessing("remapped buffer does not match image dimensions".into())
    })
}
