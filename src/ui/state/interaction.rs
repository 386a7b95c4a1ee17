// SPDX-License-Identifier: MPL-2.0
//! Drag interaction state machine.
//!
//! The anchor records `pointer − offset` at drag start, so every
//! subsequent pointer position maps directly to a new offset. Because the
//! anchor is recomputed fresh on each press — never accumulated across
//! moves — multi-step drags cannot drift.

use iced::{Point, Vector};

/// Pointer interaction state: idle, or dragging with a fixed anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position minus the pan offset at drag start.
        anchor: Point,
    },
}

impl InteractionState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }

    /// Starts a drag. No visual change happens until the first move.
    pub fn pointer_down(&mut self, position: Point, offset: Vector) {
        *self = InteractionState::Dragging {
            anchor: position - offset,
        };
    }

    /// Maps a pointer move to the new pan offset while dragging.
    /// Moves in `Idle` are ignored.
    #[must_use]
    pub fn pointer_move(&self, position: Point) -> Option<Vector> {
        match self {
            InteractionState::Dragging { anchor } => Some(position - *anchor),
            InteractionState::Idle => None,
        }
    }

    /// Ends the drag. Idempotent: releasing while idle is a no-op.
    pub fn release(&mut self) {
        *self = InteractionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_state_is_idle() {
        let state = InteractionState::default();
        assert!(!state.is_dragging());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let state = InteractionState::Idle;
        assert!(state.pointer_move(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn press_anchors_relative_to_current_offset() {
        let mut state = InteractionState::default();
        state.pointer_down(Point::new(100.0, 50.0), Vector::new(7.0, 3.0));

        assert!(state.is_dragging());
        let offset = state.pointer_move(Point::new(100.0, 50.0)).unwrap();
        // Moving back to the press position keeps the original offset.
        assert_abs_diff_eq!(offset.x, 7.0);
        assert_abs_diff_eq!(offset.y, 3.0);
    }

    #[test]
    fn multi_step_drag_does_not_drift() {
        let offset0 = Vector::new(7.0, 3.0);
        let p0 = Point::new(100.0, 50.0);
        let p2 = Point::new(130.0, 90.0);

        let mut direct = InteractionState::default();
        direct.pointer_down(p0, offset0);
        let _ = direct.pointer_move(Point::new(55.0, -200.0));
        let with_detour = direct.pointer_move(p2).unwrap();

        let mut straight = InteractionState::default();
        straight.pointer_down(p0, offset0);
        let without_detour = straight.pointer_move(p2).unwrap();

        // offset = p2 − (p0 − offset0), independent of intermediate moves.
        assert_abs_diff_eq!(with_detour.x, without_detour.x);
        assert_abs_diff_eq!(with_detour.y, without_detour.y);
        assert_abs_diff_eq!(with_detour.x, 37.0);
        assert_abs_diff_eq!(with_detour.y, 43.0);
    }

    #[test]
    fn release_is_idempotent() {
        let mut state = InteractionState::default();
        state.release();
        assert!(!state.is_dragging());

        state.pointer_down(Point::new(10.0, 10.0), Vector::new(0.0, 0.0));
        state.release();
        state.release();
        assert!(!state.is_dragging());
    }

    #[test]
    fn new_press_recomputes_the_anchor() {
        let mut state = InteractionState::default();
        state.pointer_down(Point::new(10.0, 10.0), Vector::new(0.0, 0.0));
        state.release();

        // Second drag starts from a panned offset.
        state.pointer_down(Point::new(20.0, 20.0), Vector::new(5.0, 5.0));
        let offset = state.pointer_move(Point::new(25.0, 25.0)).unwrap();
        assert_abs_diff_eq!(offset.x, 10.0);
        assert_abs_diff_eq!(offset.y, 10.0);
    }
}
