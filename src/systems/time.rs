//! Time update systems.
//!
//! - [`update_world_time`] writes the scaled frame delta into
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame.
//! - [`update_countdowns`] advances every
//!   [`CountdownTimer`](crate::components::countdown::CountdownTimer) by that
//!   delta and triggers the resulting countdown events.
use bevy_ecs::prelude::*;

use crate::components::countdown::{CountdownNotice, CountdownTimer};
use crate::events::countdown::{CountdownFinishedEvent, CountdownUpdatedEvent};
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Advance all countdown timers and emit their update/finish events.
///
/// Events for one timer are triggered in the order its steps completed.
pub fn update_countdowns(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut CountdownTimer)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut timer) in query.iter_mut() {
        if !timer.is_running() {
            continue;
        }
        for notice in timer.advance(dt) {
            match notice {
                CountdownNotice::Updated {
                    remaining,
                    progress,
                } => commands.trigger(CountdownUpdatedEvent {
                    entity,
                    remaining,
                    progress,
                }),
                CountdownNotice::Finished => commands.trigger(CountdownFinishedEvent { entity }),
            }
        }
    }
}
