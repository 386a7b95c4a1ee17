// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback (export results, config warnings).
//!
//! A trimmed notification system: severity determines color and
//! auto-dismiss timing, errors stay until dismissed manually.

use crate::ui::theme;
use iced::widget::{button, container, text, Column, Row};
use iced::{Color, Element, Length};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => theme::SUCCESS_500,
            Severity::Info => theme::INFO_500,
            Severity::Warning => theme::WARNING_500,
            Severity::Error => theme::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this notification's auto-dismiss timer has elapsed.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(duration) => now.duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the visible notification queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification, dropping the oldest beyond the cap.
    pub fn push(&mut self, notification: Notification) {
        self.visible.push_back(notification);
        while self.visible.len() > MAX_VISIBLE {
            self.visible.pop_front();
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|n| n.id() != id);
    }

    /// Drops notifications whose auto-dismiss timer has elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired(now));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Renders the visible toasts, newest last.
    pub fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new().spacing(6);
        for notification in &self.visible {
            let row = Row::new()
                .spacing(10)
                .align_y(iced::alignment::Vertical::Center)
                .push(text(notification.message()).size(14))
                .push(
                    button(text("\u{00d7}").size(14))
                        .on_press(Message::Dismiss(notification.id()))
                        .padding([0, 6]),
                );
            column = column.push(
                container(row)
                    .padding([6, 10])
                    .style(theme::toast_style(notification.severity().color())),
            );
        }
        container(column).width(Length::Fill).padding(4).into()
    }
}
