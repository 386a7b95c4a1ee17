// SPDX-License-Identifier: MPL-2.0
//! The analysis viewer: component state/update logic, pane view, and
//! control row.

pub mod component;
pub mod controls;
pub mod view;

pub use component::{Effect, Message, State};
pub use view::view;
