//! Countdown timer events.
//!
//! A [`CountdownTimer`](crate::components::countdown::CountdownTimer) entity
//! announces its lifecycle through three events:
//!
//! - [`CountdownStartedEvent`] – a run began
//! - [`CountdownUpdatedEvent`] – one interval elapsed
//! - [`CountdownFinishedEvent`] – the run reached zero
//!
//! A cancelled run (stop or reset) produces no further event.
//!
//! Timers are controlled by triggering a [`CountdownControlEvent`]; the
//! [`countdown_control_observer`] applies it and announces starts.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<CountdownUpdatedEvent>| {
//!     let e = trigger.event();
//!     println!("{:.1}s left ({:.0}%)", e.remaining, e.progress * 100.0);
//! });
//! world.trigger(CountdownControlEvent::start(timer_entity));
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::warn;

use crate::components::countdown::CountdownTimer;

/// Event emitted when a countdown run begins.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownStartedEvent {
    pub entity: Entity,
}

/// Event emitted every interval while a countdown runs.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CountdownUpdatedEvent {
    pub entity: Entity,
    /// Seconds left.
    pub remaining: f32,
    /// `remaining / duration`, from 1 towards 0.
    pub progress: f32,
}

/// Event emitted when a countdown expires naturally.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownFinishedEvent {
    pub entity: Entity,
}

/// What to do with a timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownAction {
    /// Start with the configured duration and interval.
    Start,
    /// Reconfigure then start (ignored while running).
    StartWith { duration: f32, interval: f32 },
    /// Cancel the running countdown.
    Stop,
    /// Cancel and reconfigure for the next start.
    Reset { duration: f32, interval: f32 },
}

/// Request to control the timer on `entity`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CountdownControlEvent {
    pub entity: Entity,
    pub action: CountdownAction,
}

impl CountdownControlEvent {
    pub fn start(entity: Entity) -> Self {
        Self {
            entity,
            action: CountdownAction::Start,
        }
    }

    pub fn start_with(entity: Entity, duration: f32, interval: f32) -> Self {
        Self {
            entity,
            action: CountdownAction::StartWith { duration, interval },
        }
    }

    pub fn stop(entity: Entity) -> Self {
        Self {
            entity,
            action: CountdownAction::Stop,
        }
    }

    pub fn reset(entity: Entity, duration: f32, interval: f32) -> Self {
        Self {
            entity,
            action: CountdownAction::Reset { duration, interval },
        }
    }
}

/// Observer applying [`CountdownControlEvent`]s.
///
/// Triggers [`CountdownStartedEvent`] when a start actually took effect.
/// Requests for entities without a timer are logged and ignored.
pub fn countdown_control_observer(
    trigger: On<CountdownControlEvent>,
    mut timers: Query<&mut CountdownTimer>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(mut timer) = timers.get_mut(event.entity) else {
        warn!("Countdown control for {:?} ignored: no timer", event.entity);
        return;
    };

    let started = match event.action {
        CountdownAction::Start => timer.start(),
        CountdownAction::StartWith { duration, interval } => timer.start_with(duration, interval),
        CountdownAction::Stop => {
            timer.stop();
            false
        }
        CountdownAction::Reset { duration, interval } => {
            timer.reset(duration, interval);
            false
        }
    };

    if started {
        commands.trigger(CountdownStartedEvent {
            entity: event.entity,
        });
    }
}
