// SPDX-License-Identifier: MPL-2.0
//! The application view: toasts, summary card, history navigation, and
//! the viewer pane.

use super::{App, Message};
use crate::ui::{summary, viewer};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new().spacing(12).padding(16);

        if !self.notifications.is_empty() {
            column = column.push(self.notifications.view().map(Message::Notification));
        }

        if let Some(analysis) = self.viewer.analysis() {
            column = column.push(summary::view(
                analysis,
                self.history.trend(),
                self.history.len(),
            ));
            if !self.viewer.preview() && self.history.len() > 1 {
                column = column.push(self.history_nav());
            }
        }

        column = column.push(viewer::view(&self.viewer, &self.config).map(Message::Viewer));

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn history_nav(&self) -> Element<'_, Message> {
        let mut newer = button(Text::new("\u{2190} Newer")).padding([4, 10]);
        if self.selected > 0 {
            newer = newer.on_press(Message::SelectNewer);
        }

        let mut older = button(Text::new("Older \u{2192}")).padding([4, 10]);
        if self.selected + 1 < self.history.len() {
            older = older.on_press(Message::SelectOlder);
        }

        Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(newer)
            .push(
                Text::new(format!(
                    "Analysis {} of {}",
                    self.selected + 1,
                    self.history.len()
                ))
                .size(13),
            )
            .push(older)
            .into()
    }
}
