//! Static assets: the seal template image and the score typeface.
//!
//! Both are loaded once, treated as immutable, and shared across requests
//! behind an `Arc`. A load failure is fatal (see [`crate::Error::AssetLoad`]).

use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use image::RgbaImage;

use crate::{Error, Result};

/// Default template path, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "assets/seals/seal_template.png";

/// Default font path, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "assets/fonts/SealScore-Bold.ttf";

/// The read-only resources every render draws on: the pre-rendered seal
/// template (RGBA) and the typeface used to stamp the score.
#[derive(Debug)]
pub struct SealAssets {
    pub template: RgbaImage,
    pub font: FontVec,
}

impl SealAssets {
    /// Load both assets from disk. Intended to run once at startup.
    pub fn load(template_path: &Path, font_path: &Path) -> Result<Self> {
        let template = image::open(template_path)
            .map_err(|e| Error::AssetLoad(format!("{}: {e}", template_path.display())))?
            .to_rgba8();

        let font_bytes = fs::read(font_path)
            .map_err(|e| Error::AssetLoad(format!("{}: {e}", font_path.display())))?;
        let font = FontVec::try_from_vec(font_bytes)
            .map_err(|e| Error::AssetLoad(format!("{}: {e}", font_path.display())))?;

        Ok(Self { template, font })
    }

    /// Assemble assets from already-loaded parts. Used by tests that
    /// substitute a synthetic template.
    pub fn from_parts(template: RgbaImage, font: FontVec) -> Self {
        Self { template, font }
    }
}
