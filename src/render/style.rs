// SPDX-License-Identifier: MPL-2.0
//! Draw styles for the region overlay, keyed by region category.
//!
//! A closed mapping: exactly one style per category, plus an explicit
//! fallback for `Unknown`. Pure lookup, no failure modes.

use crate::domain::AcneType;
use tiny_skia::Color;

/// Annotation opacity used for both the rectangle stroke and fill.
const ANNOTATION_ALPHA: u8 = 179; // 0.7

/// Draw style for one region category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub stroke: Color,
    pub fill: Color,
    pub label: Color,
}

impl RegionStyle {
    fn annotation(r: u8, g: u8, b: u8) -> Self {
        let color = Color::from_rgba8(r, g, b, ANNOTATION_ALPHA);
        Self {
            stroke: color,
            fill: color,
            label: Color::WHITE,
        }
    }
}

/// Returns the draw style for a region category.
#[must_use]
pub fn style_for(kind: AcneType) -> RegionStyle {
    match kind {
        AcneType::Papule => RegionStyle::annotation(255, 99, 71), // tomato
        AcneType::Pustule => RegionStyle::annotation(255, 165, 0), // orange
        AcneType::Blackhead => RegionStyle::annotation(128, 128, 128), // gray
        AcneType::Whitehead => RegionStyle::annotation(255, 255, 224), // light yellow
        AcneType::Nodule => RegionStyle::annotation(139, 0, 139), // dark magenta
        AcneType::Cyst => RegionStyle::annotation(178, 34, 34),  // firebrick
        AcneType::Unknown => RegionStyle::annotation(255, 0, 0), // fallback red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_KINDS: [AcneType; 6] = [
        AcneType::Papule,
        AcneType::Pustule,
        AcneType::Blackhead,
        AcneType::Whitehead,
        AcneType::Nodule,
        AcneType::Cyst,
    ];

    #[test]
    fn each_category_has_a_distinct_style() {
        for (i, a) in KNOWN_KINDS.iter().enumerate() {
            for b in &KNOWN_KINDS[i + 1..] {
                assert_ne!(
                    style_for(*a).stroke,
                    style_for(*b).stroke,
                    "{a:?} and {b:?} share a stroke color"
                );
            }
        }
    }

    #[test]
    fn papule_style_is_tomato() {
        let style = style_for(AcneType::Papule);
        assert_eq!(style.stroke, Color::from_rgba8(255, 99, 71, ANNOTATION_ALPHA));
        assert_eq!(style.fill, style.stroke);
        assert_eq!(style.label, Color::WHITE);
    }

    #[test]
    fn unknown_category_gets_the_fallback_style() {
        let fallback = style_for(AcneType::Unknown);
        assert_eq!(
            fallback.stroke,
            Color::from_rgba8(255, 0, 0, ANNOTATION_ALPHA)
        );
        for kind in KNOWN_KINDS {
            assert_ne!(style_for(kind).stroke, fallback.stroke);
        }
    }

    #[test]
    fn annotations_are_semi_transparent() {
        for kind in KNOWN_KINDS {
            let style = style_for(kind);
            assert!(style.fill.alpha() < 1.0);
            assert!(style.fill.alpha() > 0.0);
        }
    }
}
