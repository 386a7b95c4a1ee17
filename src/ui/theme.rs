// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and container styles.

use crate::domain::{Severity, SeverityTrend};
use iced::widget::container;
use iced::{Border, Color, Theme};

pub const WHITE: Color = Color::WHITE;
pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

/// Badge color for a severity classification.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Mild => SUCCESS_500,
        Severity::Moderate => WARNING_500,
        Severity::Severe => ERROR_500,
    }
}

/// Accent color for a trend direction.
#[must_use]
pub fn trend_color(trend: SeverityTrend) -> Color {
    match trend {
        SeverityTrend::Improving => SUCCESS_500,
        SeverityTrend::Worsening => ERROR_500,
        SeverityTrend::Stable => INFO_500,
        SeverityTrend::NoTrend => GRAY_400,
    }
}

/// Standard color for error text.
#[must_use]
pub fn error_text_color() -> Color {
    ERROR_500
}

/// Standard color for muted/secondary text.
#[must_use]
pub fn muted_text_color() -> Color {
    GRAY_400
}

/// Flat background behind the viewer pane.
#[must_use]
pub fn viewer_surface_color() -> Color {
    GRAY_100
}

/// Pill-shaped badge style tinted by `color`.
pub fn badge_style(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(color),
        background: Some(Color { a: 0.15, ..color }.into()),
        border: Border {
            color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Solid toast style for notifications.
pub fn toast_style(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(WHITE),
        background: Some(color.into()),
        border: Border {
            color,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

/// Flat style for the viewer pane background.
pub fn viewer_pane_style() -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(viewer_surface_color().into()),
        ..container::Style::default()
    }
}
