//! Swipetick demo entry point.
//!
//! Opens a raylib window where mouse drags (or touches on touch platforms)
//! are classified as swipes, and a countdown timer can be started, stopped
//! and reset from the keyboard.
//!
//! # Main Loop
//!
//! 1. Load the INI configuration and apply command-line overrides
//! 2. Build the ECS world (detector, timer entity, observers)
//! 3. Each frame: poll input, detect swipes, advance timers, draw the HUD
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --json
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use swipetick::app::{build_schedule, build_world, run_frame, spawn_countdown};
use swipetick::events::countdown::{
    CountdownFinishedEvent, CountdownStartedEvent, CountdownUpdatedEvent,
};
use swipetick::events::swipe::SwipeEvent;
use swipetick::resources::appconfig::AppConfig;
use swipetick::resources::screensize::ScreenSize;
use swipetick::systems::input::{
    countdown_keyboard_controls, swipe_keyboard_controls, update_pointer_input,
};
use swipetick::systems::render::render_system;
use swipetick::systems::swipe::detect_swipes;
use swipetick::systems::time::update_countdowns;

/// Swipe detector and countdown timer playground
#[derive(Parser)]
#[command(version, about = "Swipe detection and countdown timer demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./swipetick.ini")]
    config: PathBuf,

    /// Minimum swipe distance in pixels.
    #[arg(long, value_name = "PIXELS")]
    min_distance: Option<f32>,

    /// Report swipes only when the pointer is released.
    #[arg(long)]
    release_only: bool,

    /// Countdown duration in seconds.
    #[arg(long, value_name = "SECONDS")]
    duration: Option<f32>,

    /// Seconds between countdown updates.
    #[arg(long, value_name = "SECONDS")]
    interval: Option<f32>,

    /// Print every event as a JSON line on stdout.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

fn print_json(value: serde_json::Value) {
    println!("{}", value);
}

fn add_json_observers(world: &mut World) {
    world.add_observer(|trigger: On<SwipeEvent>| {
        match serde_json::to_value(trigger.event()) {
            Ok(swipe) => print_json(serde_json::json!({ "event": "swipe", "swipe": swipe })),
            Err(e) => log::error!("Failed to serialize swipe: {}", e),
        }
    });
    world.add_observer(|trigger: On<CountdownStartedEvent>| {
        print_json(serde_json::json!({
            "event": "countdown_started",
            "entity": trigger.event().entity.to_bits(),
        }));
    });
    world.add_observer(|trigger: On<CountdownUpdatedEvent>| {
        let e = trigger.event();
        print_json(serde_json::json!({
            "event": "countdown_updated",
            "entity": e.entity.to_bits(),
            "remaining": e.remaining,
            "progress": e.progress,
        }));
    });
    world.add_observer(|trigger: On<CountdownFinishedEvent>| {
        print_json(serde_json::json!({
            "event": "countdown_finished",
            "entity": trigger.event().entity.to_bits(),
        }));
    });
    world.flush();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    // Command-line overrides go through the same validation as the file
    if let Some(distance) = cli.min_distance {
        config.set_min_distance(distance);
    }
    if cli.release_only {
        config.detect_only_after_release = true;
    }
    if let Some(duration) = cli.duration {
        config.set_timer_duration(duration);
    }
    if let Some(interval) = cli.interval {
        config.set_timer_interval(interval);
    }

    // Early-exit: persist the effective configuration (no window needed)
    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    log::info!("Starting swipetick demo");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let target_fps = config.target_fps;
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Swipetick")
        .build();
    rl.set_target_fps(target_fps);

    // --------------- ECS world + resources ---------------
    let timer = config.countdown_timer();
    let mut world = build_world(config);
    spawn_countdown(&mut world, timer);
    if cli.json {
        add_json_observers(&mut world);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = build_schedule();
    update.add_systems(update_pointer_input.before(detect_swipes));
    update.add_systems(swipe_keyboard_controls.before(detect_swipes));
    update.add_systems(countdown_keyboard_controls.before(update_countdowns));
    update.add_systems(render_system.after(detect_swipes).after(update_countdowns));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        // Update screen size first: input flips Y against it
        let (dt, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = w;
            screen.h = h;
        }

        run_frame(&mut world, &mut update, dt);
    }
    log::info!("Bye");
}
