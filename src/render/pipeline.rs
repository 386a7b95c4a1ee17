// SPDX-License-Identifier: MPL-2.0
//! The render pipeline: image load-state machine plus the draw cycle.
//!
//! Draw order is always clear → transform → image → overlay. Decodes are
//! memoized per locator so transform changes never re-fetch, and every
//! load carries a generation token so a stale decode can never repaint a
//! viewer that has moved on.

use crate::domain::AcneRegion;
use crate::error::{Error, ExportError, Result};
use crate::media::export::ExportableFrame;
use crate::media::image::DecodedImage;
use crate::render::overlay::RegionOverlayRenderer;
use crate::render::surface::Surface;
use crate::ui::state::viewport::ViewportTransform;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tiny_skia::Transform;

/// Decoded images kept around for quick re-display while navigating a
/// patient's history.
const DECODE_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(8).unwrap();

/// Image load status.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// No locator received yet.
    Unloaded,
    /// An asynchronous fetch+decode is outstanding.
    Loading,
    /// Decode finished; the surface holds a drawable frame.
    Loaded,
    /// Fetch or decode failed; the failure is shown, never a stale frame.
    LoadFailed(Error),
}

/// What [`RenderPipeline::begin_load`] decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    /// The decode was served from cache; no task needs to be spawned.
    Cached,
    /// Spawn a fetch+decode task and report back with this generation.
    Fetch { generation: u64 },
}

pub struct RenderPipeline {
    state: LoadState,
    decoded: Option<Arc<DecodedImage>>,
    cache: LruCache<String, Arc<DecodedImage>>,
    surface: Option<Surface>,
    overlay: RegionOverlayRenderer,
    handle: Option<image::Handle>,
    generation: u64,
    has_rendered: bool,
}

impl RenderPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LoadState::Unloaded,
            decoded: None,
            cache: LruCache::new(DECODE_CACHE_CAPACITY),
            surface: None,
            overlay: RegionOverlayRenderer::new(),
            handle: None,
            generation: 0,
            has_rendered: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded)
    }

    #[must_use]
    pub fn has_rendered(&self) -> bool {
        self.has_rendered
    }

    /// Natural pixel dimensions of the decoded image.
    #[must_use]
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.decoded.as_ref().map(|img| (img.width(), img.height()))
    }

    /// Starts loading a new image locator.
    ///
    /// Bumps the generation so any still-outstanding decode is discarded
    /// when it eventually resolves. A cache hit completes synchronously.
    pub fn begin_load(&mut self, url: &str) -> LoadRequest {
        self.generation += 1;
        self.has_rendered = false;
        self.handle = None;

        if let Some(image) = self.cache.get(url) {
            let image = Arc::clone(image);
            tracing::debug!(url, "decode served from cache");
            self.install_decoded(image);
            return LoadRequest::Cached;
        }

        self.decoded = None;
        self.surface = None;
        self.state = LoadState::Loading;
        tracing::debug!(url, generation = self.generation, "decode requested");
        LoadRequest::Fetch {
            generation: self.generation,
        }
    }

    /// Applies a finished fetch+decode.
    ///
    /// Returns `false` when the result was stale (an older generation) and
    /// was discarded without touching any state.
    pub fn complete_load(
        &mut self,
        generation: u64,
        url: &str,
        result: Result<Arc<DecodedImage>>,
    ) -> bool {
        if generation != self.generation {
            tracing::warn!(url, generation, "discarding stale decode result");
            return false;
        }

        match result {
            Ok(image) => {
                self.cache.put(url.to_string(), Arc::clone(&image));
                tracing::debug!(
                    url,
                    width = image.width(),
                    height = image.height(),
                    "decode completed"
                );
                self.install_decoded(image);
            }
            Err(err) => {
                tracing::warn!(url, %err, "image load failed");
                self.decoded = None;
                self.surface = None;
                self.state = LoadState::LoadFailed(err);
            }
        }
        true
    }

    fn install_decoded(&mut self, image: Arc<DecodedImage>) {
        match Surface::new(image.width(), image.height()) {
            Some(surface) => {
                self.surface = Some(surface);
                self.decoded = Some(image);
                self.state = LoadState::Loaded;
            }
            None => {
                self.decoded = None;
                self.surface = None;
                self.state =
                    LoadState::LoadFailed(Error::Decode("image has empty dimensions".into()));
            }
        }
    }

    /// Runs one full draw cycle: clear → transform → image → overlay.
    ///
    /// Returns `false` when nothing is loaded. Safe to call on every
    /// transform/overlay/region change; the decode is never repeated.
    pub fn render(
        &mut self,
        viewport: &ViewportTransform,
        regions: &[AcneRegion],
        overlay_enabled: bool,
    ) -> bool {
        let (Some(surface), Some(image)) = (self.surface.as_mut(), self.decoded.as_ref()) else {
            return false;
        };

        let transform = viewport_transform(viewport);
        surface.clear();
        surface.draw_pixmap(image.pixmap(), transform);
        if overlay_enabled {
            self.overlay.draw(surface, regions, transform);
        }

        self.handle = Some(surface.image_handle());
        self.has_rendered = true;
        true
    }

    /// Handle for the on-screen image widget, refreshed by [`render`].
    ///
    /// [`render`]: RenderPipeline::render
    #[must_use]
    pub fn image_handle(&self) -> Option<image::Handle> {
        self.handle.clone()
    }

    /// Snapshots the current frame for export.
    ///
    /// # Errors
    ///
    /// [`ExportError::NotRendered`] until at least one successful draw has
    /// completed — never a silently blank artifact.
    pub fn snapshot(&self) -> std::result::Result<ExportableFrame, ExportError> {
        if !self.has_rendered {
            return Err(ExportError::NotRendered);
        }
        let surface = self.surface.as_ref().ok_or(ExportError::NotRendered)?;
        Ok(ExportableFrame::new(
            Arc::new(surface.rgba_bytes()),
            surface.width(),
            surface.height(),
        ))
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPipeline")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("has_rendered", &self.has_rendered)
            .finish_non_exhaustive()
    }
}

/// Builds the compositing transform: translate by the pan offset, then
/// scale — so zoom and pan come from the transform, never from resizing
/// the image itself.
fn viewport_transform(viewport: &ViewportTransform) -> Transform {
    let scale = viewport.scale();
    let offset = viewport.offset();
    Transform::from_scale(scale, scale).post_translate(offset.x, offset.y)
}
