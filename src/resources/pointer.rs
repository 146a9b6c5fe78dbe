//! Per-frame pointer input resource.
//!
//! Captures the touch points and the primary mouse button for the current
//! frame and exposes them to systems via the [`PointerInput`] resource. The
//! platform layer fills it every frame; the swipe detector only reads it.
//!
//! Positions are screen pixels with the Y axis pointing **up**, so a finger
//! moving towards the top of the screen has a positive vertical displacement.
//! Platforms with a downward Y axis flip it before writing.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Plain 2D point/vector in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Lifecycle phase of a touch point during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The finger touched the screen this frame.
    Began,
    /// The finger moved since the previous frame.
    Moved,
    /// The finger is down but did not move.
    Stationary,
    /// The finger left the screen this frame.
    Ended,
    /// The platform aborted tracking of this touch.
    Canceled,
}

/// A single touch point as seen this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform id, stable for the lifetime of the touch.
    pub id: i32,
    pub phase: TouchPhase,
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(id: i32, phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            id,
            phase,
            position: Vec2::new(x, y),
        }
    }
}

/// State of the primary mouse button and cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    pub position: Vec2,
    /// Button is held this frame (also true on the press frame).
    pub down: bool,
    /// Button went down this frame.
    pub just_pressed: bool,
    /// Button went up this frame.
    pub just_released: bool,
}

/// Resource with the pointer state relevant to gesture detection.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerInput {
    /// Whether the platform delivers touch input at all.
    pub touch_supported: bool,
    /// Touch points reported this frame, in platform order.
    pub touches: SmallVec<[TouchPoint; 4]>,
    pub mouse: MouseState,
}

impl PointerInput {
    /// Snapshot for a touch platform with the given touches.
    pub fn with_touches(touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            touch_supported: true,
            touches: touches.into_iter().collect(),
            mouse: MouseState::default(),
        }
    }

    /// True when touches should be used instead of the mouse this frame.
    pub fn uses_touch(&self) -> bool {
        self.touch_supported && !self.touches.is_empty()
    }

    /// Clear per-frame edges and touches, keeping the held button state.
    pub fn clear_frame(&mut self) {
        self.touches.clear();
        self.mouse.just_pressed = false;
        self.mouse.just_released = false;
    }

    /// Mouse pressed at `(x, y)` this frame.
    pub fn press_mouse(&mut self, x: f32, y: f32) {
        self.mouse = MouseState {
            position: Vec2::new(x, y),
            down: true,
            just_pressed: true,
            just_released: false,
        };
    }

    /// Mouse held and moved to `(x, y)` this frame.
    pub fn drag_mouse(&mut self, x: f32, y: f32) {
        self.mouse = MouseState {
            position: Vec2::new(x, y),
            down: true,
            just_pressed: false,
            just_released: false,
        };
    }

    /// Mouse released at `(x, y)` this frame.
    pub fn release_mouse(&mut self, x: f32, y: f32) {
        self.mouse = MouseState {
            position: Vec2::new(x, y),
            down: false,
            just_pressed: false,
            just_released: true,
        };
    }
}
