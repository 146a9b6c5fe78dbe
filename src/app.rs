//! World and schedule assembly.
//!
//! The owner of the world builds it here: the [`SwipeDetector`] is created
//! from [`AppConfig`] and inserted as a resource, so systems and observers
//! receive it by injection instead of looking up a global instance.
//! Ordered callback lists ([`Subscribers`]) are installed for every event.
//!
//! Frame order (see [`build_schedule`]):
//!
//! 1. platform input writes `PointerInput` (raylib builds only, added by the binary)
//! 2. [`detect_swipes`] turns pointer movement into `SwipeEvent`s
//! 3. [`update_countdowns`] advances timers with the scaled frame delta

use bevy_ecs::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::events::countdown::{
    CountdownFinishedEvent, CountdownStartedEvent, CountdownUpdatedEvent,
    countdown_control_observer,
};
use crate::events::swipe::{SwipeEvent, log_swipe_observer};
use crate::resources::appconfig::AppConfig;
use crate::resources::pointer::PointerInput;
use crate::resources::screensize::ScreenSize;
use crate::resources::subscribers::{Subscribers, publish_observer};
use crate::resources::swipedetector::SwipeDetector;
use crate::resources::swipelog::{SwipeLog, record_swipe_observer};
use crate::resources::worldtime::WorldTime;
use crate::systems::swipe::detect_swipes;
use crate::systems::time::{update_countdowns, update_world_time};

/// Create a world with every resource and observer the systems need.
pub fn build_world(config: AppConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PointerInput::default());
    world.insert_resource(SwipeDetector::new(config.swipe_settings()));
    world.insert_resource(SwipeLog::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(config);
    world.insert_resource(Subscribers::<SwipeEvent>::new());
    world.insert_resource(Subscribers::<CountdownStartedEvent>::new());
    world.insert_resource(Subscribers::<CountdownUpdatedEvent>::new());
    world.insert_resource(Subscribers::<CountdownFinishedEvent>::new());

    world.add_observer(countdown_control_observer);
    world.add_observer(log_swipe_observer);
    world.add_observer(record_swipe_observer);
    world.add_observer(publish_observer::<SwipeEvent>);
    world.add_observer(publish_observer::<CountdownStartedEvent>);
    world.add_observer(publish_observer::<CountdownUpdatedEvent>);
    world.add_observer(publish_observer::<CountdownFinishedEvent>);
    // Ensure the observers are registered before any system triggers events.
    world.flush();
    world
}

/// Schedule with the platform-independent per-frame systems.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(detect_swipes);
    update.add_systems(update_countdowns);
    update
}

/// Spawn an entity carrying `timer` and return it.
pub fn spawn_countdown(world: &mut World, timer: CountdownTimer) -> Entity {
    world.spawn(timer).id()
}

/// Advance the world by one frame of `dt` unscaled seconds.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
