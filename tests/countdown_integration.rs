//! Countdown timers through the ECS: control events in, notifications out.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;

use swipetick::app::{build_schedule, build_world, run_frame, spawn_countdown};
use swipetick::components::countdown::CountdownTimer;
use swipetick::events::countdown::{
    CountdownControlEvent, CountdownFinishedEvent, CountdownStartedEvent, CountdownUpdatedEvent,
};
use swipetick::resources::appconfig::AppConfig;
use swipetick::resources::subscribers::Subscribers;
use swipetick::resources::worldtime::WorldTime;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Started(Entity),
    Updated(Entity, f32, f32),
    Finished(Entity),
}

/// Record every countdown notification, in delivery order.
fn record(world: &mut World) -> Arc<Mutex<Vec<Seen>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = seen.clone();
    world
        .resource_mut::<Subscribers<CountdownStartedEvent>>()
        .subscribe(move |e: &CountdownStartedEvent| s.lock().unwrap().push(Seen::Started(e.entity)));
    let s = seen.clone();
    world
        .resource_mut::<Subscribers<CountdownUpdatedEvent>>()
        .subscribe(move |e: &CountdownUpdatedEvent| {
            s.lock()
                .unwrap()
                .push(Seen::Updated(e.entity, e.remaining, e.progress))
        });
    let s = seen.clone();
    world
        .resource_mut::<Subscribers<CountdownFinishedEvent>>()
        .subscribe(move |e: &CountdownFinishedEvent| s.lock().unwrap().push(Seen::Finished(e.entity)));
    seen
}

fn setup(duration: f32, interval: f32) -> (World, Schedule, Entity, Arc<Mutex<Vec<Seen>>>) {
    let mut world = build_world(AppConfig::new());
    let schedule = build_schedule();
    let entity = spawn_countdown(&mut world, CountdownTimer::new(duration, interval));
    let seen = record(&mut world);
    (world, schedule, entity, seen)
}

/// Trigger a control event and apply the commands its observer queued.
fn control(world: &mut World, event: CountdownControlEvent) {
    world.trigger(event);
    world.flush();
}

fn counts(seen: &Arc<Mutex<Vec<Seen>>>) -> (usize, usize, usize) {
    let seen = seen.lock().unwrap();
    let started = seen.iter().filter(|s| matches!(s, Seen::Started(_))).count();
    let updated = seen.iter().filter(|s| matches!(s, Seen::Updated(..))).count();
    let finished = seen.iter().filter(|s| matches!(s, Seen::Finished(_))).count();
    (started, updated, finished)
}

#[test]
fn one_second_run_with_half_second_ticks() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.5);

    control(&mut world, CountdownControlEvent::start(entity));
    assert_eq!(*seen.lock().unwrap(), vec![Seen::Started(entity)]);
    assert!(world.get::<CountdownTimer>(entity).unwrap().is_running());

    for _ in 0..4 {
        run_frame(&mut world, &mut schedule, 0.5);
    }

    let seen_now = seen.lock().unwrap().clone();
    assert_eq!(seen_now.len(), 3);
    assert_eq!(seen_now[0], Seen::Started(entity));
    match seen_now[1] {
        Seen::Updated(e, remaining, progress) => {
            assert_eq!(e, entity);
            assert!(approx_eq(remaining, 0.5));
            assert!(approx_eq(progress, 0.5));
        }
        ref other => panic!("expected update, got {:?}", other),
    }
    assert_eq!(seen_now[2], Seen::Finished(entity));
    assert!(!world.get::<CountdownTimer>(entity).unwrap().is_running());
}

#[test]
fn start_with_configures_and_runs() {
    let (mut world, mut schedule, entity, seen) = setup(60.0, 1.0);

    control(&mut world, CountdownControlEvent::start_with(entity, 1.0, 0.5));
    for _ in 0..2 {
        run_frame(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(counts(&seen), (1, 1, 1));
    assert_eq!(world.get::<CountdownTimer>(entity).unwrap().duration(), 1.0);
}

#[test]
fn stop_before_first_tick_suppresses_updates_and_end() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.5);

    control(&mut world, CountdownControlEvent::start(entity));
    run_frame(&mut world, &mut schedule, 0.1);
    control(&mut world, CountdownControlEvent::stop(entity));
    for _ in 0..10 {
        run_frame(&mut world, &mut schedule, 0.5);
    }

    assert_eq!(*seen.lock().unwrap(), vec![Seen::Started(entity)]);
    assert!(!world.get::<CountdownTimer>(entity).unwrap().is_running());
}

#[test]
fn stop_mid_run_suppresses_end() {
    let (mut world, mut schedule, entity, seen) = setup(2.0, 0.5);

    control(&mut world, CountdownControlEvent::start(entity));
    run_frame(&mut world, &mut schedule, 0.5);
    run_frame(&mut world, &mut schedule, 0.5);
    control(&mut world, CountdownControlEvent::stop(entity));
    for _ in 0..10 {
        run_frame(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(counts(&seen), (1, 2, 0));
}

#[test]
fn reset_while_running_leaves_idle_with_new_parameters() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.5);

    control(&mut world, CountdownControlEvent::start(entity));
    run_frame(&mut world, &mut schedule, 0.5);
    control(&mut world, CountdownControlEvent::reset(entity, 2.0, 1.0));
    for _ in 0..5 {
        run_frame(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(counts(&seen), (1, 1, 0));
    {
        let timer = world.get::<CountdownTimer>(entity).unwrap();
        assert!(!timer.is_running());
        assert_eq!(timer.duration(), 2.0);
        assert_eq!(timer.interval(), 1.0);
    }

    // Next start uses the new parameters: one update at 1.0, then the end
    control(&mut world, CountdownControlEvent::start(entity));
    for _ in 0..4 {
        run_frame(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(counts(&seen), (2, 2, 1));
    let seen_now = seen.lock().unwrap();
    match seen_now[3] {
        Seen::Updated(_, remaining, progress) => {
            assert!(approx_eq(remaining, 1.0));
            assert!(approx_eq(progress, 0.5));
        }
        ref other => panic!("expected update, got {:?}", other),
    }
}

#[test]
fn restarting_while_running_is_ignored() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.5);

    control(&mut world, CountdownControlEvent::start(entity));
    run_frame(&mut world, &mut schedule, 0.5);
    control(&mut world, CountdownControlEvent::start(entity));
    control(&mut world, CountdownControlEvent::start_with(entity, 30.0, 0.1));
    run_frame(&mut world, &mut schedule, 0.5);

    assert_eq!(counts(&seen), (1, 1, 1));
}

#[test]
fn timers_follow_time_scale() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.5);
    world.resource_mut::<WorldTime>().time_scale = 0.5;

    control(&mut world, CountdownControlEvent::start(entity));
    run_frame(&mut world, &mut schedule, 0.5);
    assert_eq!(counts(&seen), (1, 0, 0));
    run_frame(&mut world, &mut schedule, 0.5);
    assert_eq!(counts(&seen), (1, 1, 0));

    world.resource_mut::<WorldTime>().time_scale = 0.0;
    for _ in 0..10 {
        run_frame(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(counts(&seen), (1, 1, 0));
    assert!(world.get::<CountdownTimer>(entity).unwrap().is_running());
}

#[test]
fn independent_timers_do_not_interfere() {
    let (mut world, mut schedule, slow, seen) = setup(2.0, 1.0);
    let fast = spawn_countdown(&mut world, CountdownTimer::new(0.5, 0.5));

    control(&mut world, CountdownControlEvent::start(slow));
    control(&mut world, CountdownControlEvent::start(fast));
    run_frame(&mut world, &mut schedule, 0.5);
    control(&mut world, CountdownControlEvent::stop(slow));
    run_frame(&mut world, &mut schedule, 1.0);

    let seen_now = seen.lock().unwrap();
    assert!(seen_now.contains(&Seen::Finished(fast)));
    assert!(!seen_now.contains(&Seen::Finished(slow)));
    assert!(
        !seen_now
            .iter()
            .any(|s| matches!(s, Seen::Updated(e, ..) if *e == slow))
    );
}

#[test]
fn control_event_for_entity_without_timer_is_ignored() {
    let (mut world, mut schedule, _entity, seen) = setup(1.0, 0.5);
    let stranger = world.spawn_empty().id();

    control(&mut world, CountdownControlEvent::start(stranger));
    run_frame(&mut world, &mut schedule, 1.0);

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn idle_timer_emits_nothing() {
    let (mut world, mut schedule, _entity, seen) = setup(1.0, 0.1);
    for _ in 0..20 {
        run_frame(&mut world, &mut schedule, 0.1);
    }
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn uneven_duration_never_reports_negative_time() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.3);

    control(&mut world, CountdownControlEvent::start(entity));
    for _ in 0..6 {
        run_frame(&mut world, &mut schedule, 0.3);
    }

    assert_eq!(counts(&seen), (1, 3, 1));
    let seen_now = seen.lock().unwrap();
    for s in seen_now.iter() {
        if let Seen::Updated(_, remaining, progress) = s {
            assert!(*remaining > 0.0);
            assert!(*progress > 0.0);
        }
    }
    assert_eq!(seen_now.last(), Some(&Seen::Finished(entity)));
}

#[test]
fn nan_duration_from_control_event_finishes_immediately() {
    let (mut world, mut schedule, entity, seen) = setup(1.0, 0.5);

    control(
        &mut world,
        CountdownControlEvent::start_with(entity, f32::NAN, 0.5),
    );
    for _ in 0..10 {
        run_frame(&mut world, &mut schedule, 0.5);
    }

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Seen::Started(entity), Seen::Finished(entity)]
    );
}
