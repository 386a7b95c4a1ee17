// SPDX-License-Identifier: MPL-2.0
//! `derma_lens` is a viewer for region-annotated skin analysis records,
//! built with the Iced GUI framework.
//!
//! It renders a diagnostic photograph with detected regions overlaid in
//! type-coded styling, supports pan/zoom/overlay-toggle/export interaction,
//! and computes a directional severity trend over a patient's history.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod render;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
