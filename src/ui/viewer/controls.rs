// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: zoom buttons, view reset, overlay toggle, and export.

use crate::ui::state::ViewportTransform;
use crate::ui::viewer::component::Message;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Space, Text},
    Element, Length,
};

pub fn view<'a>(viewport: &ViewportTransform, overlay_enabled: bool) -> Element<'a, Message> {
    let zoom = viewport.zoom_scale();

    let mut zoom_out_button = button(Text::new("\u{2212}")).padding([6, 12]);
    if !zoom.is_min() {
        zoom_out_button = zoom_out_button.on_press(Message::ZoomOutPressed);
    }

    let zoom_label = Text::new(format!("{}%", viewport.scale_percent())).size(14);

    let mut zoom_in_button = button(Text::new("+")).padding([6, 12]);
    if !zoom.is_max() {
        zoom_in_button = zoom_in_button.on_press(Message::ZoomInPressed);
    }

    let reset_button = button(Text::new("Reset"))
        .on_press(Message::ViewResetPressed)
        .padding([6, 12]);

    let overlay_button = button(Text::new(if overlay_enabled {
        "Hide Overlay"
    } else {
        "Show Overlay"
    }))
    .on_press(Message::OverlayToggled)
    .padding([6, 12]);

    let export_button = button(Text::new("Export"))
        .on_press(Message::ExportRequested)
        .padding([6, 12]);

    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(zoom_out_button)
        .push(zoom_label)
        .push(zoom_in_button)
        .push(reset_button)
        .push(Space::new().width(Length::Fixed(16.0)).height(Length::Shrink))
        .push(overlay_button)
        .push(export_button)
        .into()
}
