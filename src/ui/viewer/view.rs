// SPDX-License-Identifier: MPL-2.0
//! Viewer pane: the rendered surface with pointer handling, plus the
//! loading/failed/empty states and the control row.

use crate::config::Config;
use crate::render::pipeline::LoadState;
use crate::ui::theme;
use crate::ui::viewer::component::{Message, State};
use crate::ui::viewer::controls;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Column, Container, Text};
use iced::{mouse, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, config: &'a Config) -> Element<'a, Message> {
    let height = if state.preview() {
        config.preview_height()
    } else {
        config.full_height()
    };

    let pane_content: Element<'_, Message> = match state.load_state() {
        LoadState::Unloaded => placeholder("No analysis loaded"),
        LoadState::Loading => placeholder("Loading image\u{2026}"),
        LoadState::LoadFailed(err) => Column::new()
            .spacing(4)
            .align_x(Horizontal::Center)
            .push(
                Text::new("Unable to load image")
                    .size(16)
                    .color(theme::error_text_color()),
            )
            .push(
                Text::new(err.to_string())
                    .size(13)
                    .color(theme::muted_text_color()),
            )
            .into(),
        LoadState::Loaded => match state.image_handle() {
            Some(handle) => {
                let surface_image = image(handle)
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill);

                let cursor = if state.is_dragging() {
                    mouse::Interaction::Grabbing
                } else {
                    mouse::Interaction::Grab
                };

                mouse_area(surface_image)
                    .on_move(Message::PointerMoved)
                    .on_press(Message::PointerPressed)
                    .on_release(Message::PointerReleased)
                    .on_exit(Message::PointerExited)
                    .interaction(cursor)
                    .into()
            }
            None => placeholder("Loading image\u{2026}"),
        },
    };

    let pane = Container::new(pane_content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::viewer_pane_style());

    let mut column = Column::new().spacing(8).push(pane);

    if state.preview() {
        column = column.push(
            button(Text::new("View Full Analysis"))
                .on_press(Message::PromoteRequested)
                .padding([6, 12])
                .width(Length::Fill),
        );
    } else {
        column = column.push(controls::view(state.viewport(), state.overlay_enabled()));
        column = column.push(
            Text::new("Drag to pan, use controls to zoom and toggle detection overlay")
                .size(12)
                .color(theme::muted_text_color()),
        );
    }

    column.into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label)
        .size(14)
        .color(theme::muted_text_color())
        .into()
}
