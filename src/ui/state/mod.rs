// SPDX-License-Identifier: MPL-2.0
//! Explicit owned state structs for the viewer, each with single-owner
//! mutation discipline.

pub mod interaction;
pub mod viewport;

pub use interaction::InteractionState;
pub use viewport::ViewportTransform;
