//! Accessibility seal generation
//!
//! Renders a numeric accessibility score onto a pre-made seal template and
//! derives a black-text variant from the white composite, exposing both
//! through a small HTTP API as PNG data URIs.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use sealgen::{Score, SealAssets, SealRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assets = SealAssets::load(
//!     Path::new("assets/seals/seal_template.png"),
//!     Path::new("assets/fonts/SealScore-Bold.ttf"),
//! )?;
//! let renderer = SealRenderer::new(Arc::new(assets));
//!
//! let score: Score = "7.5".parse()?;
//! let pair = renderer.render_pair(&score)?;
//! assert_eq!(pair.white.dimensions(), pair.black.dimensions());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod assets;
pub mod encode;
pub mod remap;
pub mod render;
pub mod score;
pub mod service;

pub use assets::SealAssets;
pub use render::{SealPair, SealRenderer};
pub use score::Score;
