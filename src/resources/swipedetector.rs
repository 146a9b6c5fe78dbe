//! Swipe gesture detector resource.
//!
//! [`SwipeDetector`] turns the per-frame [`PointerInput`] snapshot into
//! [`SwipeEvent`]s. It lives in the ECS world as a resource; the owner inserts
//! it (see [`crate::app::build_world`]) and systems receive it by injection.
//!
//! # How It Works
//!
//! - Pointer down sets the anchor.
//! - While dragging (continuous mode) or on release, the displacement from the
//!   anchor to the current position is measured on both axes.
//! - When the larger axis exceeds `min_distance`, the swipe is classified and
//!   the anchor moves to the current position, so a long drag can produce
//!   several swipes as it changes direction.
//! - A direction is reported once per drag until it changes or the pointer is
//!   released and pressed again.
//!
//! Simultaneous touches are processed in order against the same anchor.

use bevy_ecs::prelude::*;
use log::trace;
use smallvec::SmallVec;

use crate::events::swipe::{SwipeDirection, SwipeEvent};
use crate::resources::pointer::{MouseState, PointerInput, TouchPhase, TouchPoint, Vec2};

/// Default minimum swipe distance in pixels.
pub const DEFAULT_MIN_DISTANCE: f32 = 20.0;

/// User-facing configuration of the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    /// When false, input is ignored entirely.
    pub enabled: bool,
    /// Report swipes only when the pointer is released.
    pub detect_only_after_release: bool,
    /// Distance in pixels the pointer must travel along one axis.
    pub min_distance: f32,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            detect_only_after_release: false,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// Resource holding the detector settings and gesture state.
#[derive(Resource, Debug, Clone)]
pub struct SwipeDetector {
    settings: SwipeSettings,
    /// Reference point displacements are measured from.
    anchor: Vec2,
    /// Latest pointer position fed to detection.
    current: Vec2,
    /// True between gestures; the next swipe starts a new sequence.
    swipe_completed: bool,
    last_direction: Option<SwipeDirection>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeSettings::default())
    }
}

impl SwipeDetector {
    pub fn new(settings: SwipeSettings) -> Self {
        Self {
            settings,
            anchor: Vec2::ZERO,
            current: Vec2::ZERO,
            swipe_completed: true,
            last_direction: None,
        }
    }

    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SwipeSettings {
        &mut self.settings
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn last_direction(&self) -> Option<SwipeDirection> {
        self.last_direction
    }

    /// True while a drag has reported a swipe and not been released yet.
    pub fn swipe_in_progress(&self) -> bool {
        !self.swipe_completed
    }

    /// Forget the current gesture. Settings are kept.
    pub fn reset(&mut self) {
        self.anchor = Vec2::ZERO;
        self.current = Vec2::ZERO;
        self.swipe_completed = true;
        self.last_direction = None;
    }

    /// Run one polling tick and return the swipes detected in it.
    pub fn process(&mut self, input: &PointerInput) -> SmallVec<[SwipeEvent; 2]> {
        let mut out = SmallVec::new();
        if !self.settings.enabled {
            return out;
        }
        if input.uses_touch() {
            for touch in input.touches.iter() {
                self.handle_touch(touch, &mut out);
            }
        } else {
            self.handle_mouse(&input.mouse, &mut out);
        }
        out
    }

    fn handle_touch(&mut self, touch: &TouchPoint, out: &mut SmallVec<[SwipeEvent; 2]>) {
        match touch.phase {
            TouchPhase::Began => {
                self.anchor = touch.position;
                self.current = touch.position;
            }
            TouchPhase::Moved => {
                if !self.settings.detect_only_after_release {
                    self.current = touch.position;
                    out.extend(self.detect());
                }
            }
            TouchPhase::Stationary => {}
            TouchPhase::Ended => {
                self.current = touch.position;
                out.extend(self.detect());
                self.swipe_completed = true;
            }
            TouchPhase::Canceled => {
                self.swipe_completed = true;
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseState, out: &mut SmallVec<[SwipeEvent; 2]>) {
        if mouse.just_pressed {
            self.anchor = mouse.position;
            self.current = mouse.position;
        }
        if !self.settings.detect_only_after_release && mouse.down {
            self.current = mouse.position;
            out.extend(self.detect());
        }
        if mouse.just_released {
            self.current = mouse.position;
            out.extend(self.detect());
            self.swipe_completed = true;
        }
    }

    fn horizontal_distance(&self) -> f32 {
        (self.current.x - self.anchor.x).abs()
    }

    fn vertical_distance(&self) -> f32 {
        (self.current.y - self.anchor.y).abs()
    }

    fn distance_check_met(&self) -> bool {
        self.vertical_distance() > self.settings.min_distance
            || self.horizontal_distance() > self.settings.min_distance
    }

    /// Classify the displacement from the anchor, if it is long enough.
    fn classify(&self) -> Option<SwipeDirection> {
        if !self.distance_check_met() {
            return None;
        }
        let direction = if self.vertical_distance() > self.horizontal_distance() {
            if self.current.y - self.anchor.y > 0.0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            }
        } else if self.current.x - self.anchor.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        Some(direction)
    }

    fn detect(&mut self) -> Option<SwipeEvent> {
        let direction = self.classify()?;
        trace!("Swipe classified as {:?}", direction);
        let mut emitted = None;
        if self.swipe_completed || self.last_direction != Some(direction) {
            self.swipe_completed = false;
            self.last_direction = Some(direction);
            emitted = Some(SwipeEvent {
                start: self.anchor,
                end: self.current,
                direction,
            });
        } else {
            trace!("Swipe {:?} repeated within the same drag, not emitted", direction);
        }
        self.anchor = self.current;
        emitted
    }
}
