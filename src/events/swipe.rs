//! Swipe gesture events.
//!
//! A [`SwipeEvent`] is triggered by the
//! [`detect_swipes`](crate::systems::swipe::detect_swipes) system whenever the
//! [`SwipeDetector`](crate::resources::swipedetector::SwipeDetector) classifies
//! a drag as a swipe. Observers subscribe with `On<SwipeEvent>`; they are not
//! ordered relative to each other, so consumers that care about order use
//! [`Subscribers<SwipeEvent>`](crate::resources::subscribers::Subscribers).
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<SwipeEvent>| {
//!     match trigger.event().direction {
//!         SwipeDirection::Left => { /* previous page */ }
//!         SwipeDirection::Right => { /* next page */ }
//!         _ => {}
//!     }
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::pointer::Vec2;

/// Cardinal direction of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Event emitted once per detected swipe.
///
/// `start` is the anchor the displacement was measured from and `end` the
/// pointer position that crossed the distance threshold.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub start: Vec2,
    pub end: Vec2,
    pub direction: SwipeDirection,
}

impl SwipeEvent {
    /// Displacement from `start` to `end`.
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Observer that logs every swipe at debug level.
pub fn log_swipe_observer(trigger: On<SwipeEvent>) {
    let event = trigger.event();
    let delta = event.delta();
    log::debug!(
        "Swipe {} from ({:.1}, {:.1}) by ({:.1}, {:.1})",
        event.direction.as_str(),
        event.start.x,
        event.start.y,
        delta.x,
        delta.y
    );
}
