//! Standard window and input payloads.
//!
//! These are the events a frame driver typically publishes once per frame
//! after polling the platform layer. Key and button codes are passed through
//! untouched from the windowing backend.

use super::Event;

/// A point in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A key went down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressed {
    /// Backend key code
    pub key: i32,
}

/// A key was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleased {
    /// Backend key code
    pub key: i32,
}

/// The cursor moved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoved {
    /// New cursor position
    pub position: Position,
}

/// A mouse button changed state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseClicked {
    /// Backend button code
    pub button: i32,
    /// Cursor position at the time of the click
    pub position: Position,
    /// `true` on press, `false` on release
    pub down: bool,
}

/// The window's drawable area changed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResized {
    /// New width in pixels
    pub width: u32,
    /// New height in pixels
    pub height: u32,
}

impl Event for KeyPressed {
    fn event_type() -> &'static str {
        "KeyPressed"
    }
}

impl Event for KeyReleased {
    fn event_type() -> &'static str {
        "KeyReleased"
    }
}

impl Event for MouseMoved {
    fn event_type() -> &'static str {
        "MouseMoved"
    }
}

impl Event for MouseClicked {
    fn event_type() -> &'static str {
        "MouseClicked"
    }
}

impl Event for WindowResized {
    fn event_type() -> &'static str {
        "WindowResized"
    }
}
