//! End-to-end render pipeline tests against the bundled assets.

use std::path::PathBuf;
use std::sync::Arc;

use sealgen::remap::remap_white_to_black;
use sealgen::{Error, Score, SealAssets, SealRenderer};

fn renderer() -> SealRenderer {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let assets = SealAssets::load(
        &root.join(sealgen::assets::DEFAULT_TEMPLATE_PATH),
        &root.join(sealgen::assets::DEFAULT_FONT_PATH),
    )
    .expect("bundled assets");
    SealRenderer::new(Arc::new(assets))
}

#[test]
fn valid_scores_render_at_template_dimensions() {
    let renderer = renderer();
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let template = image::open(root.join(sealgen::assets::DEFAULT_TEMPLATE_PATH))
        .unwrap()
        .to_rgba8();

    for raw in ["0", "2.22", "7.5", "9.99", "10"] {
        let score: Score = raw.parse().unwrap();
        let pair = renderer.render_pair(&score).unwrap();
        assert_eq!(pair.white.dimensions(), template.dimensions(), "{raw}");
        assert_eq!(pair.black.dimensions(), template.dimensions(), "{raw}");
    }
}

#[test]
fn out_of_range_and_excess_precision_scores_are_rejected() {
    for raw in ["-0.5", "-1", "10.01", "15", "7.005", "3.333", "7.777"] {
        let err = raw.parse::<Score>().unwrap_err();
        assert!(matches!(err, Error::InvalidScore(_)), "{raw}");
    }
}

#[test]
fn black_seal_is_the_white_seal_with_text_remapped() {
    let renderer = renderer();
    let score: Score = "7.5".parse().unwrap();
    let pair = renderer.render_pair(&score).unwrap();

    let white_text_pixels = pair
        .white
        .pixels()
        .filter(|p| p.0 == [255, 255, 255, 255])
        .count();
    let black_text_pixels = pair
        .black
        .pixels()
        .filter(|p| p.0 == [0, 0, 0, 255])
        .count();

    // The template itself contains neither pure white nor opaque black, so
    // the remapped pixel population must match the glyph body exactly.
    assert!(white_text_pixels > 0, "no white glyph pixels rendered");
    assert_eq!(white_text_pixels, black_text_pixels);

    // No opaque pure-white pixel survives in the black variant.
    assert!(!pair
        .black
        .pixels()
        .any(|p| p.0[0] == 255 && p.0[1] == 255 && p.0[2] == 255 && p.0[3] != 0));

    // Transparent background stays transparent in both variants.
    assert_eq!(pair.white.get_pixel(0, 0).0[3], 0);
    assert_eq!(pair.black.get_pixel(0, 0).0[3], 0);
}

#[test]
fn remapping_an_already_black_seal_changes_nothing() {
    let renderer = renderer();
    let score: Score = "10".parse().unwrap();
    let pair = renderer.render_pair(&score).unwrap();
    let again = remap_white_to_black(&pair.black).unwrap();
    assert_eq!(again, pair.black);
}

#[test]
fn white_variant_is_not_consumed_by_deriving_the_black_one() {
    let renderer = renderer();
    let score: Score = "7.5".parse().unwrap();
    let white = renderer.render_white(&score).unwrap();
    let before = white.clone();
    let _black = remap_white_to_black(&white).unwrap();
    assert_eq!(white, before);
}
