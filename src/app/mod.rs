// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` wires the viewer component to its collaborators: the analysis
//! history document, the configuration, and the notification toasts. The
//! update loop routes viewer effects (export feedback, promote-to-full)
//! back into application state.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::AnalysisHistory;
use crate::media::export::ExportFormat;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::viewer;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    config: Config,
    history: AnalysisHistory,
    /// Index into the history, 0 = most recent.
    selected: usize,
    viewer: viewer::State,
    notifications: Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("analyses", &self.history.len())
            .field("selected", &self.selected)
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the first image load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load(flags.config_dir.as_deref().map(Path::new));

        let mut notifications = Manager::new();
        if let Some(warning) = config_warning {
            notifications.push(Notification::warning(warning));
        }

        let history = match &flags.history_path {
            Some(path) => match AnalysisHistory::load(Path::new(path)) {
                Ok(history) => {
                    tracing::info!(
                        analyses = history.len(),
                        patient = history.patient_id().unwrap_or("-"),
                        "history loaded"
                    );
                    history
                }
                Err(err) => {
                    tracing::warn!(%err, path = %path, "could not load history document");
                    notifications.push(Notification::error(format!(
                        "Could not load {path}: {err}"
                    )));
                    AnalysisHistory::default()
                }
            },
            None => AnalysisHistory::default(),
        };

        let mut viewer = viewer::State::new(config.overlay_enabled(), flags.preview);
        let task = match history.most_recent().cloned() {
            Some(analysis) => viewer.set_analysis(analysis).map(Message::Viewer),
            None => Task::none(),
        };

        let app = App {
            config,
            history,
            selected: 0,
            viewer,
            notifications,
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.history.patient_id() {
            Some(patient) => format!("DermaLens \u{2014} Patient {patient}"),
            None => "DermaLens".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only tick while toasts are on screen.
        if self.notifications.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(500)).map(Message::Tick)
        }
    }

    fn default_export_format(&self) -> ExportFormat {
        ExportFormat::from_extension(self.config.export_format()).unwrap_or_default()
    }
}
