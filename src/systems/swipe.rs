//! Swipe detection system.
//!
//! Feeds the frame's [`PointerInput`](crate::resources::pointer::PointerInput)
//! to the [`SwipeDetector`](crate::resources::swipedetector::SwipeDetector)
//! resource and triggers a [`SwipeEvent`](crate::events::swipe::SwipeEvent)
//! for every swipe it reports.
use bevy_ecs::prelude::*;

use crate::resources::pointer::PointerInput;
use crate::resources::swipedetector::SwipeDetector;

/// Run one detector tick per frame.
///
/// Must run after the platform has written `PointerInput` for this frame.
pub fn detect_swipes(
    mut detector: ResMut<SwipeDetector>,
    input: Res<PointerInput>,
    mut commands: Commands,
) {
    for event in detector.process(&input) {
        commands.trigger(event);
    }
}
