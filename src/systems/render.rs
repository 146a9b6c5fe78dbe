//! Debug renderer for the demo window (raylib).
//!
//! Draws the recent swipe history, the detector anchor while a drag is in
//! progress, and a progress bar per countdown timer. Positions stored in
//! resources are Y-up; they are flipped back to raylib screen space here.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::resources::pointer::PointerInput;
use crate::resources::screensize::ScreenSize;
use crate::resources::swipedetector::SwipeDetector;
use crate::resources::swipelog::SwipeLog;
use crate::resources::worldtime::WorldTime;

const BAR_HEIGHT: i32 = 16;
const MARGIN: i32 = 10;

/// Exclusive system: take the raylib handle out of the world, draw, put it back.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(th) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(Color::RAYWHITE);
        render_swipes(world, &mut d);
        render_countdowns(world, &mut d);
        render_help(world, &mut d);
    }
    world.insert_non_send_resource(th);
    world.insert_non_send_resource(rl);
}

fn render_swipes(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();

    if let Some(log) = world.get_resource::<SwipeLog>() {
        let headline = match log.last() {
            Some(last) => format!("Last swipe: {}", last.direction.as_str().to_uppercase()),
            None => "Swipe with the mouse or a finger".to_string(),
        };
        d.draw_text(&headline, MARGIN, MARGIN, 30, Color::DARKGRAY);
        d.draw_text(
            &format!("Total swipes: {}", log.total),
            MARGIN,
            MARGIN + 36,
            10,
            Color::GRAY,
        );
        for (row, event) in log.iter().rev().enumerate() {
            let delta = event.delta();
            let text = format!(
                "{:<5} ({:.0}, {:.0}) -> ({:.0}, {:.0})  d=({:.0}, {:.0})",
                event.direction.as_str(),
                event.start.x,
                event.start.y,
                event.end.x,
                event.end.y,
                delta.x,
                delta.y
            );
            d.draw_text(&text, MARGIN, MARGIN + 56 + row as i32 * 14, 10, Color::GRAY);
        }
    }

    let dragging = world
        .get_resource::<PointerInput>()
        .map(|input| input.mouse.down || !input.touches.is_empty())
        .unwrap_or(false);
    if let Some(detector) = world.get_resource::<SwipeDetector>() {
        if dragging {
            let anchor = detector.anchor();
            let x = anchor.x as i32;
            let y = screen.h - anchor.y as i32;
            let radius = detector.settings().min_distance;
            d.draw_circle_lines(x, y, radius, Color::MAROON);
            d.draw_line(x - 5, y, x + 5, y, Color::MAROON);
            d.draw_line(x, y - 5, x, y + 5, Color::MAROON);
        }
        if !detector.is_enabled() {
            d.draw_text("swipes disabled", screen.w - 110, MARGIN, 10, Color::RED);
        }
    }
}

fn render_countdowns(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let bar_width = screen.w - 2 * MARGIN;
    let mut timers = world.query::<&CountdownTimer>();
    for (row, timer) in timers.iter(world).enumerate() {
        let y = screen.h - 60 - row as i32 * (BAR_HEIGHT + 20);
        let filled = (bar_width as f32 * timer.progress().clamp(0.0, 1.0)) as i32;
        let color = if timer.is_running() {
            Color::DARKGREEN
        } else {
            Color::LIGHTGRAY
        };
        d.draw_rectangle(MARGIN, y, filled, BAR_HEIGHT, color);
        d.draw_rectangle_lines(MARGIN, y, bar_width, BAR_HEIGHT, Color::DARKGRAY);
        let label = format!(
            "{:.1}s / {:.1}s{}",
            timer.remaining(),
            timer.duration(),
            if timer.is_running() { "" } else { " (idle)" }
        );
        d.draw_text(&label, MARGIN, y - 14, 10, Color::DARKGRAY);
    }
}

fn render_help(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let time = *world.resource::<WorldTime>();
    let fps = d.get_fps();
    let text = format!(
        "SPACE start | S stop | R reset | E toggle swipes | D release-only | FPS: {} | t={:.1}s frame {}",
        fps, time.elapsed, time.frame_count
    );
    d.draw_text(&text, MARGIN, screen.h - 20, 10, Color::BLACK);
}
