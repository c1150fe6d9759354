//! Drag State Machine
//!
//! Idle until a primary-button press lands on an item title or an info body,
//! dragging until the next pointer release. Pointer input arrives already
//! hit-tested by the host; the wizard only sees ids and client coordinates.

use crate::geometry::Point;
use crate::models::EntityKey;

/// `MouseEvent.buttons` value for "only the primary button is down"
pub const PRIMARY_BUTTON: u16 = 1;

/// What the pointer went down on
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Title region of the item with this id
    ItemTitle(String),
    /// Body or text of the info entry with this id
    InfoBody(String),
    /// Anything else inside the widget
    Elsewhere,
}

/// Pointer press inside the widget
#[derive(Debug, Clone, PartialEq)]
pub struct PointerDown {
    pub target: PointerTarget,
    pub pointer: Point,
    pub buttons: u16,
    /// Top-left of the pressed element, used to capture the grab offset
    pub target_origin: Point,
    /// Top-left of the widget root, the hover layer's coordinate space
    pub root_origin: Point,
}

/// Pointer release anywhere in the document
#[derive(Debug, Clone, PartialEq)]
pub struct PointerUp {
    pub pointer: Point,
    /// Whether the release target lies inside the field
    pub over_field: bool,
    pub field_origin: Point,
}

/// The entity being dragged and where it was grabbed
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub key: EntityKey,
    pub grab_offset: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

impl DragState {
    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(drag) => Some(drag),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// End the drag, returning what was dragged
    pub fn finish(&mut self) -> Option<ActiveDrag> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging(drag) => Some(drag),
        }
    }
}

/// Arrow keys that nudge a focused item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Map `KeyboardEvent.key`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    /// `(top, left)` direction
    pub fn delta(self) -> (f64, f64) {
        match self {
            ArrowKey::Up => (-1.0, 0.0),
            ArrowKey::Down => (1.0, 0.0),
            ArrowKey::Left => (0.0, -1.0),
            ArrowKey::Right => (0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_returns_to_idle() {
        let mut state = DragState::Dragging(ActiveDrag {
            key: EntityKey::item("a"),
            grab_offset: Point::new(3.0, 4.0),
        });
        assert!(state.is_dragging());
        let drag = state.finish().unwrap();
        assert_eq!(drag.key, EntityKey::item("a"));
        assert_eq!(state, DragState::Idle);
        assert!(state.finish().is_none());
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(ArrowKey::from_key("ArrowLeft"), Some(ArrowKey::Left));
        assert_eq!(ArrowKey::from_key("Enter"), None);
        assert_eq!(ArrowKey::Down.delta(), (1.0, 0.0));
    }
}
