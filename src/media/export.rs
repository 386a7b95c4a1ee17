// SPDX-License-Identifier: MPL-2.0
//! Export of the rendered surface to raster formats (PNG, JPEG, WebP)
//! using the `image` crate.
//!
//! The exported artifact is the current on-screen composited frame at the
//! surface's pixel dimensions, named after the analysis identifier.

use crate::error::ExportError;
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use std::path::Path;
use std::sync::Arc;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless, best quality).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// WebP format (modern, good compression).
    WebP,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    /// Returns the image format for the `image` crate.
    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Returns all supported formats.
    #[must_use]
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::WebP]
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "webp" => Some(ExportFormat::WebP),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// A snapshot of the rendered surface, ready to be exported.
///
/// Uses `Arc<Vec<u8>>` so the frame can travel through messages (e.g.
/// across a save-dialog round trip) without cloning the pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportableFrame {
    /// Straight-alpha RGBA pixel data.
    pub rgba_data: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl ExportableFrame {
    /// Creates a new exportable frame from RGBA data.
    #[must_use]
    pub fn new(rgba_data: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self {
            rgba_data,
            width,
            height,
        }
    }

    /// Exports the frame to a file.
    ///
    /// The format is determined by the file extension if not specified.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the image cannot be encoded or written
    /// to disk; the caller surfaces it, never swallows it.
    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: Option<ExportFormat>,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();

        let format = format
            .or_else(|| ExportFormat::from_path(path))
            .unwrap_or_default();

        let img: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(self.width, self.height, (*self.rgba_data).clone()).ok_or_else(
                || ExportError::Encode("pixel buffer does not match frame dimensions".to_string()),
            )?;

        // JPEG has no alpha channel; flatten before encoding.
        if format == ExportFormat::Jpeg {
            let rgb_img = image_rs::DynamicImage::ImageRgba8(img).to_rgb8();
            rgb_img
                .save_with_format(path, format.image_format())
                .map_err(|e| ExportError::Io(e.to_string()))?;
        } else {
            img.save_with_format(path, format.image_format())
                .map_err(|e| ExportError::Io(e.to_string()))?;
        }

        Ok(())
    }
}

/// Generates the download filename for an analysis export.
///
/// Format: `acne-analysis-<analysisId>.<ext>`
#[must_use]
pub fn export_filename(analysis_id: &str, format: ExportFormat) -> String {
    format!("acne-analysis-{}.{}", analysis_id, format.extension())
}
