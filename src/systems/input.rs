//! Input systems (raylib platform).
//!
//! - [`update_pointer_input`] reads touch points and the left mouse button
//!   from Raylib each frame and writes them into
//!   [`PointerInput`](crate::resources::pointer::PointerInput).
//! - [`countdown_keyboard_controls`] maps keys to countdown control events.
//! - [`swipe_keyboard_controls`] toggles swipe detection and its mode.
//!
//! Raylib reports touch points without a phase, so phases are derived by
//! comparing touch ids against the previous frame. Raylib's Y axis points
//! down; positions are flipped so that up is positive.
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::{KeyboardKey, MouseButton, RaylibHandle};
use rustc_hash::FxHashMap;

use crate::components::countdown::CountdownTimer;
use crate::events::countdown::CountdownControlEvent;
use crate::resources::appconfig::AppConfig;
use crate::resources::pointer::{MouseState, PointerInput, TouchPhase, TouchPoint, Vec2};
use crate::resources::screensize::ScreenSize;
use crate::resources::swipedetector::SwipeDetector;

/// Touch positions seen last frame, keyed by touch id.
#[derive(Default)]
pub struct TrackedTouches(FxHashMap<i32, Vec2>);

fn to_y_up(x: f32, y: f32, screen: &ScreenSize) -> Vec2 {
    Vec2::new(x, screen.h as f32 - y)
}

/// Poll Raylib for touch and mouse input and update the `PointerInput` resource.
pub fn update_pointer_input(
    mut input: ResMut<PointerInput>,
    screen: Res<ScreenSize>,
    rl: NonSend<RaylibHandle>,
    mut tracked: Local<TrackedTouches>,
) {
    input.clear_frame();
    input.touch_supported = cfg!(target_os = "android");

    if input.touch_supported {
        // SAFETY: plain getters on raylib's input state; the window is open
        // for as long as the RaylibHandle resource exists.
        let count = unsafe { ffi::GetTouchPointCount() };
        let mut seen: FxHashMap<i32, Vec2> = FxHashMap::default();
        for index in 0..count {
            let (id, raw) = unsafe { (ffi::GetTouchPointId(index), ffi::GetTouchPosition(index)) };
            let position = to_y_up(raw.x, raw.y, &screen);
            let phase = match tracked.0.get(&id) {
                None => TouchPhase::Began,
                Some(previous) if *previous != position => TouchPhase::Moved,
                Some(_) => TouchPhase::Stationary,
            };
            input.touches.push(TouchPoint {
                id,
                phase,
                position,
            });
            seen.insert(id, position);
        }
        // Touches that vanished since last frame were lifted
        for (&id, &position) in tracked.0.iter() {
            if !seen.contains_key(&id) {
                input.touches.push(TouchPoint {
                    id,
                    phase: TouchPhase::Ended,
                    position,
                });
            }
        }
        tracked.0 = seen;
    }

    let mouse = rl.get_mouse_position();
    input.mouse = MouseState {
        position: to_y_up(mouse.x, mouse.y, &screen),
        down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        just_pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        just_released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
    };
}

/// Keyboard shortcuts for every countdown timer in the world.
///
/// Space starts, S stops, R resets to the configured duration and interval.
pub fn countdown_keyboard_controls(
    rl: NonSend<RaylibHandle>,
    config: Res<AppConfig>,
    timers: Query<Entity, With<CountdownTimer>>,
    mut commands: Commands,
) {
    let start = rl.is_key_pressed(KeyboardKey::KEY_SPACE);
    let stop = rl.is_key_pressed(KeyboardKey::KEY_S);
    let reset = rl.is_key_pressed(KeyboardKey::KEY_R);
    for entity in timers.iter() {
        if reset {
            commands.trigger(CountdownControlEvent::reset(
                entity,
                config.timer_duration,
                config.timer_interval,
            ));
        }
        if stop {
            commands.trigger(CountdownControlEvent::stop(entity));
        }
        if start {
            commands.trigger(CountdownControlEvent::start(entity));
        }
    }
}

/// E toggles the swipe detector on and off; D switches between continuous
/// and release-only detection.
pub fn swipe_keyboard_controls(rl: NonSend<RaylibHandle>, mut detector: ResMut<SwipeDetector>) {
    if rl.is_key_pressed(KeyboardKey::KEY_E) {
        let enabled = !detector.is_enabled();
        detector.set_enabled(enabled);
        if !enabled {
            detector.reset();
        }
        log::info!("Swipe detection {}", if enabled { "enabled" } else { "disabled" });
    }
    if rl.is_key_pressed(KeyboardKey::KEY_D) {
        let settings = detector.settings_mut();
        settings.detect_only_after_release = !settings.detect_only_after_release;
        let release_only = settings.detect_only_after_release;
        log::info!(
            "Swipe detection mode: {}",
            if release_only { "on release" } else { "continuous" }
        );
    }
}
