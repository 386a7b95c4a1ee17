// SPDX-License-Identifier: MPL-2.0
//! The application update loop.

use super::{App, Message};
use crate::ui::viewer;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => {
                let format = self.default_export_format();
                let (task, effect) = self.viewer.update(msg, format);
                match effect {
                    viewer::Effect::None => {}
                    viewer::Effect::PromoteToFullView => self.viewer.set_preview(false),
                    viewer::Effect::Notify(notification) => {
                        self.notifications.push(notification);
                    }
                }
                task.map(Message::Viewer)
            }
            Message::SelectNewer => {
                if self.selected == 0 {
                    return Task::none();
                }
                self.select(self.selected - 1)
            }
            Message::SelectOlder => self.select(self.selected + 1),
            Message::Notification(msg) => {
                self.notifications.update(msg);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.prune(now);
                Task::none()
            }
        }
    }

    fn select(&mut self, index: usize) -> Task<Message> {
        if index == self.selected {
            return Task::none();
        }
        match self.history.get(index).cloned() {
            Some(analysis) => {
                self.selected = index;
                self.viewer.set_analysis(analysis).map(Message::Viewer)
            }
            None => Task::none(),
        }
    }
}
