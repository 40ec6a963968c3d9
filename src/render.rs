//! Score rendering: stamp the formatted score onto the seal template.
//!
//! The score text is drawn in solid opaque white onto a transparent layer
//! the size of the template, then the layer is alpha-composited over the
//! template. The black variant is derived afterwards by
//! [`crate::remap::remap_white_to_black`], never rendered independently,
//! so both variants always carry the same score at the same position.

use std::sync::Arc;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::assets::SealAssets;
use crate::remap::remap_white_to_black;
use crate::score::Score;
use crate::{Error, Result};

/// Pixel size of the stamped score text, tuned to the bundled template.
const SCORE_PX: f32 = 245.0;

/// Horizontal base offset of the score text on the template.
const BASE_OFFSET_X: i32 = 250;

/// Extra horizontal offset per '7' in the formatted score. '7' is a narrow
/// glyph in the chosen typeface; without the nudge the text sits visually
/// off-centre.
const SEVEN_NUDGE: i32 = 20;

/// Extra horizontal offset per '1' (narrower still than '7').
const ONE_NUDGE: i32 = 30;

/// Vertical offset of the text block, fixed for all scores.
const OFFSET_Y: i32 = 229;

/// The white composite and its black derivative for one request.
pub struct SealPair {
    pub white: RgbaImage,
    pub black: RgbaImage,
}

/// Top-left origin of the score text for the given formatted string.
///
/// The x offset grows by a fixed nudge per occurrence of '7' and '1', so it
/// is monotonically non-decreasing in those digit counts.
pub fn text_origin(formatted: &str) -> (i32, i32) {
    let sevens = formatted.matches('7').count() as i32;
    let ones = formatted.matches('1').count() as i32;
    (BASE_OFFSET_X + SEVEN_NUDGE * sevens + ONE_NUDGE * ones, OFFSET_Y)
}

/// Renders scores onto the shared template.
pub struct SealRenderer {
    assets: Arc<SealAssets>,
}

impl SealRenderer {
    pub fn new(assets: Arc<SealAssets>) -> Self {
        Self { assets }
    }

    /// Render the white variant: score text composited over the template.
    /// The output has the template's exact dimensions.
    pub fn render_white(&self, score: &Score) -> Result<RgbaImage> {
        let text = score.formatted();
        let origin = text_origin(&text);
        let (w, h) = self.assets.template.dimensions();

        let mut layer = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 0]));
        draw_text(&mut layer, &self.assets.font, SCORE_PX, origin, &text);

        alpha_composite(&self.assets.template, &layer)
    }

    /// Render both variants. The black seal is always derived from the
    /// white one by remapping, so the pair cannot disagree on placement.
    pub fn render_pair(&self, score: &Score) -> Result<SealPair> {
        let white = self.render_white(score)?;
        let black = remap_white_to_black(&white)?;
        Ok(SealPair { white, black })
    }
}

/// Rasterize `text` at `px` onto `layer` in opaque white, with `origin` as
/// the top-left anchor (baseline sits at `origin.y + ascent`).
///
/// Colour channels are pinned to pure white; glyph coverage drives only the
/// alpha channel, so fully-covered interiors end up exactly (255,255,255,255)
/// after compositing.
fn draw_text(layer: &mut RgbaImage, font: &FontVec, px: f32, origin: (i32, i32), text: &str) {
    let scaled = font.as_scaled(PxScale::from(px));
    let baseline = origin.1 as f32 + scaled.ascent();
    let mut caret = origin.0 as f32;
    let mut prev = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, id);
        }
        let glyph = id.with_scale_and_position(scaled.scale(), point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i32 + gx as i32;
            let y = bounds.min.y as i32 + gy as i32;
            if x < 0 || y < 0 || x as u32 >= layer.width() || y as u32 >= layer.height() {
                return;
            }
            let alpha = (coverage * 255.0).round().clamp(0.0, 255.0) as u8;
            if alpha == 0 {
                return;
            }
            let dst = layer.get_pixel_mut(x as u32, y as u32);
            // Glyph boxes can overlap; keep the stronger coverage.
            if alpha > dst.0[3] {
                *dst = Rgba([255, 255, 255, alpha]);
            }
        });
    }
}

/// Straight-alpha "over" composite of `layer` onto `base`, as a bulk
/// transform over the raw channel buffers. Neither input is mutated.
pub fn alpha_composite(base: &RgbaImage, layer: &RgbaImage) -> Result<RgbaImage> {
    if base.dimensions() != layer.dimensions() {
        return Err(Error::ImageProcessing(format!(
            "composite size mismatch: base {:?} vs layer {:?}",
            base.dimensions(),
            layer.dimensions()
        )));
    }

    let mut out = Vec::with_capacity(base.as_raw().len());
    for (b, l) in base
        .as_raw()
        .chunks_exact(4)
        .zip(layer.as_raw().chunks_exact(4))
    {
        let sa = l[3] as f32 / 255.0;
        let ba = b[3] as f32 / 255.0;
        let oa = sa + ba * (1.0 - sa);
        if oa == 0.0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        for c in 0..3 {
            let v = (l[c] as f32 * sa + b[c] as f32 * ba * (1.0 - sa)) / oa;
            out.push(v.round().clamp(0.0, 255.0) as u8);
        }
        out.push((oa * 255.0).round().clamp(0.0, 255.0) as u8);
    }

    let (w, h) = base.dimensions();
    RgbaImage::from_raw(w, h, out)
        .ok_or_else(|| Error::ImageProcessing("composited buffer has wrong length".into()))
}
