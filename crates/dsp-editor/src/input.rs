//! Input abstraction layer.
//!
//! Normalizes host pointer and keyboard events into a unified `InputEvent`
//! consumed by the gesture classifier and the shortcut map. Pointer
//! coordinates are surface coordinates (before the canvas pan offset);
//! timestamps are milliseconds from any monotonic origin the host likes.

use kurbo::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64, time_ms: f64 },

    /// Pointer moved.
    PointerMove { x: f64, y: f64, time_ms: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64, time_ms: f64 },

    /// Pointer left the canvas surface. Cancels like a release.
    PointerLeave { time_ms: f64 },

    /// Keyboard key press.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64, time_ms: f64) -> Self {
        Self::PointerDown { x, y, time_ms }
    }

    pub fn from_pointer_move(x: f64, y: f64, time_ms: f64) -> Self {
        Self::PointerMove { x, y, time_ms }
    }

    pub fn from_pointer_up(x: f64, y: f64, time_ms: f64) -> Self {
        Self::PointerUp { x, y, time_ms }
    }

    pub fn from_pointer_leave(time_ms: f64) -> Self {
        Self::PointerLeave { time_ms }
    }

    /// A bare key press without modifiers.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// Extract position if this is a pointer event that carries one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y, .. } => Some(Point::new(*x, *y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_positioned_pointer_events_carry_a_point() {
        assert_eq!(
            InputEvent::from_pointer_down(3.0, 4.0, 0.0).position(),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(InputEvent::from_pointer_leave(5.0).position(), None);
        assert_eq!(InputEvent::key("Enter").position(), None);
    }
}
