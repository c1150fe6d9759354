//! Placement Geometry
//!
//! Grid snapping and field clamping. Coordinates are CSS pixels, `x` maps to
//! `left` and `y` to `top`.

use crate::models::Position;

/// A point in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of `self` from `origin`
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Round to the nearest multiple of `step`, ties toward positive infinity.
/// Steps of 1 or less leave the value untouched.
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    if step > 1.0 {
        (value / step + 0.5).floor() * step
    } else {
        value
    }
}

/// Clamp into `[0, max]`; a negative `max` pins to zero
pub fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Clamp a position into a `width` x `height` box
pub fn clamp_position(position: Position, max_left: f64, max_top: f64) -> Position {
    Position {
        top: clamp_axis(position.top, max_top),
        left: clamp_axis(position.left, max_left),
    }
}

/// Top-left corner of an element dragged by `pointer`, relative to
/// `origin`, given where inside the element it was grabbed
pub fn drag_position(
    pointer: Point,
    origin: Point,
    grab_offset: Point,
    step: Option<f64>,
) -> Position {
    let raw = pointer.relative_to(origin).relative_to(grab_offset);
    let snap = |v: f64| match step {
        Some(step) => snap_to_grid(v, step),
        None => v,
    };
    Position {
        top: snap(raw.y),
        left: snap(raw.x),
    }
}
