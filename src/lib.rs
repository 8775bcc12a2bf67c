#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gif-mosaic` slices an animated GIF into a grid of small animated tiles
//! that can be uploaded individually and placed side by side to rebuild the
//! original animation.
//!
pub use mosaic_types::*;
