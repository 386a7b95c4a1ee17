// SPDX-License-Identifier: MPL-2.0
//! Image decoding from encoded bytes (PNG, JPEG, GIF, WebP, BMP).

use crate::error::{Error, Result};
use image_rs::GenericImageView;
use std::fmt;
use tiny_skia::{IntSize, Pixmap};

/// A decoded image held as a premultiplied-alpha pixmap, ready to be
/// composited onto the drawing surface.
#[derive(Clone)]
pub struct DecodedImage {
    pixmap: Pixmap,
}

impl DecodedImage {
    /// Natural pixel width of the source image.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Natural pixel height of the source image.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Decodes encoded image bytes into a [`DecodedImage`].
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image format
/// or the image has empty dimensions.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    let mut rgba = img.to_rgba8().into_vec();

    // tiny-skia pixmaps store premultiplied alpha; the `image` crate
    // produces straight alpha.
    for pixel in rgba.chunks_exact_mut(4) {
        let alpha = u16::from(pixel[3]);
        if alpha < 255 {
            pixel[0] = ((u16::from(pixel[0]) * alpha) / 255) as u8;
            pixel[1] = ((u16::from(pixel[1]) * alpha) / 255) as u8;
            pixel[2] = ((u16::from(pixel[2]) * alpha) / 255) as u8;
        }
    }

    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| Error::Decode("image has empty dimensions".into()))?;
    let pixmap = Pixmap::from_vec(rgba, size)
        .ok_or_else(|| Error::Decode("pixel buffer does not match dimensions".into()))?;

    Ok(DecodedImage { pixmap })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let decoded = decode_image(&png_bytes(&image)).expect("png should decode");
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn decode_premultiplies_transparent_pixels() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 128]));
        let decoded = decode_image(&png_bytes(&image)).expect("png should decode");

        let pixel = decoded.pixmap().pixels()[0];
        // Premultiplied channel values can never exceed alpha.
        assert!(pixel.red() <= pixel.alpha());
        assert!(pixel.green() <= pixel.alpha());
        assert_eq!(pixel.alpha(), 128);
    }

    #[test]
    fn decode_invalid_bytes_returns_decode_error() {
        match decode_image(b"not an image") {
            Err(crate::error::Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
