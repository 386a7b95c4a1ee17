// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{notifications, viewer};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::component::Message),
    Notification(notifications::Message),
    /// Show the next-newer analysis in the history.
    SelectNewer,
    /// Show the next-older analysis in the history.
    SelectOlder,
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Path to the analysis-history JSON document.
    pub history_path: Option<String>,
    /// Start in compact preview mode (no interactive controls).
    pub preview: bool,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
