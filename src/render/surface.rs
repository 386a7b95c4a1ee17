// SPDX-License-Identifier: MPL-2.0
//! The drawing surface: a pixel-addressable target the render pipeline
//! writes into and the export function reads from.

use iced::widget::image;
use tiny_skia::{
    Color, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapMut, PixmapPaint, Rect,
    Stroke, Transform,
};

/// An owned pixmap sized to the source image's natural dimensions.
///
/// All drawing goes through the methods here; geometry is expressed in the
/// pre-transform (source-image pixel) coordinate space and positioned by
/// the transform argument, so stroke widths scale with zoom.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Allocates a surface. Returns `None` for empty dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Clears the surface to full transparency.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Composites a decoded image under the given transform.
    pub fn draw_pixmap(&mut self, source: &Pixmap, transform: Transform) {
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }

    /// Strokes a rectangle outline. `line_width` is in pre-transform space.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32, transform: Transform) {
        let path = PathBuilder::from_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, transform, None);
    }

    /// Fills a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color, transform: Transform) {
        let path = PathBuilder::from_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    /// Mutable view for external rasterizers (label text pass).
    pub fn as_pixmap_mut(&mut self) -> PixmapMut<'_> {
        self.pixmap.as_mut()
    }

    /// The surface contents as straight-alpha RGBA bytes.
    #[must_use]
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            bytes.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        bytes
    }

    /// A single demultiplied pixel, for inspection.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<tiny_skia::ColorU8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let index = (y * self.width() + x) as usize;
        Some(self.pixmap.pixels()[index].demultiply())
    }

    /// Builds an Iced image handle showing the current surface contents.
    #[must_use]
    pub fn image_handle(&self) -> image::Handle {
        image::Handle::from_rgba(self.width(), self.height(), self.rgba_bytes())
    }
}
