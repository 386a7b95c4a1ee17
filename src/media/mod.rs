// SPDX-License-Identifier: MPL-2.0
//! Image acquisition and serialization: source resolution, decoding, and
//! raster export.

pub mod export;
pub mod image;
pub mod source;

pub use export::{ExportFormat, ExportableFrame};
pub use image::{decode_image, DecodedImage};
pub use source::{load_image, ImageSource};
