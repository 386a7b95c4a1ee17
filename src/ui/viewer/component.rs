// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! Routes pointer and control events into the viewport transform and the
//! render pipeline, and raises effects (toasts, promote-to-full) that the
//! hosting app performs.

use crate::domain::AcneAnalysis;
use crate::error::Error;
use crate::media::export::{export_filename, ExportFormat, ExportableFrame};
use crate::media::image::DecodedImage;
use crate::media::source;
use crate::render::pipeline::{LoadRequest, LoadState, RenderPipeline};
use crate::ui::notifications::Notification;
use crate::ui::state::{InteractionState, ViewportTransform};
use iced::{Point, Task};
use std::path::PathBuf;
use std::sync::Arc;

/// Messages emitted by viewer widgets and tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// An asynchronous fetch+decode finished.
    ImageDecoded {
        generation: u64,
        url: String,
        result: Result<Arc<DecodedImage>, Error>,
    },
    /// Pointer moved over the pane (also tracked while not dragging).
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerExited,
    ZoomInPressed,
    ZoomOutPressed,
    ViewResetPressed,
    OverlayToggled,
    ExportRequested,
    /// Result of the save dialog; carries the frame captured when the
    /// export was requested so a redraw in between cannot change it.
    ExportDialogResult {
        path: Option<PathBuf>,
        frame: ExportableFrame,
        filename: String,
    },
    PromoteRequested,
}

/// Side effects the hosting application should perform after an update.
#[derive(Debug)]
pub enum Effect {
    None,
    /// Preview mode asked to switch to the full view.
    PromoteToFullView,
    /// Show user-facing feedback.
    Notify(Notification),
}

/// Viewer state: the current analysis plus the transform, interaction and
/// pipeline that render it.
#[derive(Debug)]
pub struct State {
    analysis: Option<AcneAnalysis>,
    pipeline: RenderPipeline,
    viewport: ViewportTransform,
    interaction: InteractionState,
    overlay_enabled: bool,
    overlay_default: bool,
    preview: bool,
    cursor_position: Option<Point>,
}

impl State {
    #[must_use]
    pub fn new(overlay_enabled: bool, preview: bool) -> Self {
        Self {
            analysis: None,
            pipeline: RenderPipeline::new(),
            viewport: ViewportTransform::default(),
            interaction: InteractionState::default(),
            overlay_enabled,
            overlay_default: overlay_enabled,
            preview,
            cursor_position: None,
        }
    }

    /// Installs a new analysis and starts loading its image.
    ///
    /// The viewport, drag state and overlay flag reset to their initial
    /// values: each analysis gets a fresh viewer lifecycle.
    pub fn set_analysis(&mut self, analysis: AcneAnalysis) -> Task<Message> {
        self.viewport.reset();
        self.interaction.release();
        self.overlay_enabled = self.overlay_default;

        let url = analysis.image_url.clone();
        self.analysis = Some(analysis);

        match self.pipeline.begin_load(&url) {
            LoadRequest::Cached => {
                self.redraw();
                Task::none()
            }
            LoadRequest::Fetch { generation } => {
                let fetch_url = url.clone();
                Task::perform(
                    async move { source::load_image(&fetch_url).await.map(Arc::new) },
                    move |result| Message::ImageDecoded {
                        generation,
                        url: url.clone(),
                        result,
                    },
                )
            }
        }
    }

    pub fn update(&mut self, message: Message, default_format: ExportFormat) -> (Task<Message>, Effect) {
        match message {
            Message::ImageDecoded {
                generation,
                url,
                result,
            } => {
                if self.pipeline.complete_load(generation, &url, result) {
                    self.redraw();
                }
                (Task::none(), Effect::None)
            }
            Message::PointerMoved(position) => {
                self.cursor_position = Some(position);
                if let Some(offset) = self.interaction.pointer_move(position) {
                    self.viewport.pan_to(offset);
                    self.redraw();
                }
                (Task::none(), Effect::None)
            }
            Message::PointerPressed => {
                if let Some(position) = self.cursor_position {
                    self.interaction.pointer_down(position, self.viewport.offset());
                }
                (Task::none(), Effect::None)
            }
            Message::PointerReleased => {
                self.interaction.release();
                (Task::none(), Effect::None)
            }
            Message::PointerExited => {
                self.cursor_position = None;
                self.interaction.release();
                (Task::none(), Effect::None)
            }
            Message::ZoomInPressed => {
                self.viewport.zoom_in();
                self.redraw();
                (Task::none(), Effect::None)
            }
            Message::ZoomOutPressed => {
                self.viewport.zoom_out();
                self.redraw();
                (Task::none(), Effect::None)
            }
            Message::ViewResetPressed => {
                self.viewport.reset();
                self.redraw();
                (Task::none(), Effect::None)
            }
            Message::OverlayToggled => {
                self.overlay_enabled = !self.overlay_enabled;
                self.redraw();
                (Task::none(), Effect::None)
            }
            Message::ExportRequested => self.request_export(default_format),
            Message::ExportDialogResult {
                path,
                frame,
                filename,
            } => self.finish_export(path, &frame, &filename, default_format),
            Message::PromoteRequested => (Task::none(), Effect::PromoteToFullView),
        }
    }

    fn request_export(&mut self, default_format: ExportFormat) -> (Task<Message>, Effect) {
        let Some(analysis) = &self.analysis else {
            return (Task::none(), Effect::None);
        };

        match self.pipeline.snapshot() {
            Ok(frame) => {
                let filename = export_filename(&analysis.id, default_format);
                let dialog_name = filename.clone();
                let task = Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_file_name(&dialog_name)
                            .save_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    move |path| Message::ExportDialogResult {
                        path,
                        frame: frame.clone(),
                        filename: filename.clone(),
                    },
                );
                (task, Effect::None)
            }
            Err(err) => {
                tracing::warn!(%err, "export refused");
                (
                    Task::none(),
                    Effect::Notify(Notification::error(format!("Export failed: {err}"))),
                )
            }
        }
    }

    fn finish_export(
        &self,
        path: Option<PathBuf>,
        frame: &ExportableFrame,
        filename: &str,
        default_format: ExportFormat,
    ) -> (Task<Message>, Effect) {
        let Some(path) = path else {
            // Dialog cancelled.
            return (Task::none(), Effect::None);
        };

        let format = ExportFormat::from_path(&path).unwrap_or(default_format);
        match frame.save_to_file(&path, Some(format)) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "analysis exported");
                (
                    Task::none(),
                    Effect::Notify(Notification::success(format!("Exported {filename}"))),
                )
            }
            Err(err) => (
                Task::none(),
                Effect::Notify(Notification::error(format!("Export failed: {err}"))),
            ),
        }
    }

    /// Re-runs the draw cycle with the current transform and overlay flag.
    fn redraw(&mut self) {
        let regions: &[_] = self
            .analysis
            .as_ref()
            .map_or(&[], |analysis| &analysis.regions);
        self.pipeline.render(&self.viewport, regions, self.overlay_enabled);
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AcneAnalysis> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        self.pipeline.state()
    }

    #[must_use]
    pub fn image_handle(&self) -> Option<iced::widget::image::Handle> {
        self.pipeline.image_handle()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[must_use]
    pub fn overlay_enabled(&self) -> bool {
        self.overlay_enabled
    }

    #[must_use]
    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
    }
}
