// SPDX-License-Identifier: MPL-2.0
//! Region overlay renderer.
//!
//! Draws each region in list order: stroked rectangle, semi-transparent
//! fill, then a `"<type> (<confidence>%)"` label just above the rectangle.
//! Later entries occlude earlier ones where they overlap; that is the
//! whole z-order policy.

use crate::domain::AcneRegion;
use crate::render::style::style_for;
use crate::render::surface::Surface;
use resvg::usvg;
use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;
use tiny_skia::{Color, Rect, Transform};

/// Rectangle outline width, in pre-transform coordinates so the visual
/// thickness scales with zoom.
const REGION_LINE_WIDTH: f32 = 2.0;
/// Label font size, also in pre-transform coordinates.
const LABEL_FONT_SIZE: f32 = 12.0;
/// Vertical gap between a region's top edge and its label baseline.
const LABEL_OFFSET: f32 = 5.0;

/// Draws one frame of annotations onto a surface positioned under the
/// active transform.
///
/// Rectangles are drawn directly; labels go through an SVG text pass so
/// they rasterize with system fonts.
pub struct RegionOverlayRenderer {
    options: usvg::Options<'static>,
}

impl RegionOverlayRenderer {
    #[must_use]
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(fontdb);
        Self { options }
    }

    /// Draws all regions in list order under `transform`.
    pub fn draw(&self, surface: &mut Surface, regions: &[AcneRegion], transform: Transform) {
        for region in regions {
            let style = style_for(region.kind);
            let Some(rect) =
                Rect::from_xywh(region.x, region.y, region.width, region.height)
            else {
                // Geometry is validated at document load; skip rather than
                // abort the frame if a degenerate rect slips through.
                continue;
            };
            surface.stroke_rect(rect, style.stroke, REGION_LINE_WIDTH, transform);
            surface.fill_rect(rect, style.fill, transform);
        }

        self.draw_labels(surface, regions, transform);
    }

    fn draw_labels(&self, surface: &mut Surface, regions: &[AcneRegion], transform: Transform) {
        if regions.is_empty() {
            return;
        }
        let svg = labels_svg(surface.width(), surface.height(), regions);
        match usvg::Tree::from_str(&svg, &self.options) {
            Ok(tree) => resvg::render(&tree, transform, &mut surface.as_pixmap_mut()),
            Err(err) => tracing::warn!("label rasterization failed: {err}"),
        }
    }
}

impl Default for RegionOverlayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegionOverlayRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionOverlayRenderer").finish_non_exhaustive()
    }
}

/// Builds a single SVG document holding every label for the frame.
fn labels_svg(width: u32, height: u32, regions: &[AcneRegion]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for region in regions {
        let style = style_for(region.kind);
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" fill="{fill}">{label}</text>"#,
            x = region.x,
            y = region.y - LABEL_OFFSET,
            size = LABEL_FONT_SIZE,
            fill = color_hex(style.label),
            label = region.label(),
        );
    }
    svg.push_str("</svg>");
    svg
}

fn color_hex(color: Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        (color.red() * 255.0).round() as u8,
        (color.green() * 255.0).round() as u8,
        (color.blue() * 255.0).round() as u8
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AcneType;

    fn region(id: &str, x: f32, y: f32, w: f32, h: f32, kind: AcneType) -> AcneRegion {
        AcneRegion {
            id: id.to_string(),
            x,
            y,
            width: w,
            height: h,
            confidence: 0.9,
            kind,
        }
    }

    #[test]
    fn later_region_dominates_the_overlap() {
        let renderer = RegionOverlayRenderer::new();
        let mut surface = Surface::new(100, 100).expect("surface");
        surface.clear();

        // Tomato papule first, gray blackhead second; they overlap at 30..50.
        let regions = vec![
            region("a", 10.0, 10.0, 40.0, 40.0, AcneType::Papule),
            region("b", 30.0, 30.0, 40.0, 40.0, AcneType::Blackhead),
        ];
        renderer.draw(&mut surface, &regions, Transform::identity());

        let papule_only = surface.pixel(20, 20).expect("pixel");
        let overlap = surface.pixel(40, 40).expect("pixel");

        // The papule-only area is strongly red; in the overlap the gray
        // fill composites on top and pulls the red channel down.
        assert!(papule_only.red() > 230);
        assert!(papule_only.red() > papule_only.green());
        assert!(overlap.red() < 200);
    }

    #[test]
    fn regions_render_under_the_active_transform() {
        let renderer = RegionOverlayRenderer::new();
        let mut surface = Surface::new(100, 100).expect("surface");
        surface.clear();

        let regions = vec![region("a", 10.0, 10.0, 10.0, 10.0, AcneType::Cyst)];
        let transform = Transform::from_scale(2.0, 2.0).post_translate(5.0, 5.0);
        renderer.draw(&mut surface, &regions, transform);

        // (15, 15) maps to (35, 35) on the surface.
        let inside = surface.pixel(35, 35).expect("pixel");
        assert!(inside.alpha() > 0);

        // The untransformed position stays empty.
        let original = surface.pixel(12, 12).expect("pixel");
        assert_eq!(original.alpha(), 0);
    }

    #[test]
    fn empty_region_list_draws_nothing() {
        let renderer = RegionOverlayRenderer::new();
        let mut surface = Surface::new(10, 10).expect("surface");
        surface.clear();
        renderer.draw(&mut surface, &[], Transform::identity());

        assert!(surface.rgba_bytes().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn labels_svg_contains_one_text_element_per_region() {
        let regions = vec![
            region("a", 120.0, 80.0, 30.0, 30.0, AcneType::Papule),
            region("b", 10.0, 40.0, 5.0, 5.0, AcneType::Cyst),
        ];
        let svg = labels_svg(200, 150, &regions);
        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains("papule (90%)"));
        assert!(svg.contains(r#"y="75""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }
}
