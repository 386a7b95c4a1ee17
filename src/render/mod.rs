// SPDX-License-Identifier: MPL-2.0
//! The CPU rendering stack: style table, drawing surface, region overlay
//! renderer, and the render pipeline that orchestrates them.
//!
//! One surface feeds both the on-screen image widget and the export
//! encoder, so the exported artifact is the on-screen frame by
//! construction.

pub mod overlay;
pub mod pipeline;
pub mod style;
pub mod surface;

pub use overlay::RegionOverlayRenderer;
pub use pipeline::{LoadRequest, LoadState, RenderPipeline};
pub use style::{style_for, RegionStyle};
pub use surface::Surface;
