//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and accessed by systems each
//! frame.
//!
//! Overview
//! - `appconfig` – INI-backed configuration for swipes, timers and the demo window
//! - `pointer` – per-frame touch and mouse snapshot
//! - `screensize` – current framebuffer dimensions in pixels
//! - `subscribers` – ordered callback lists fed by observers
//! - `swipedetector` – swipe gesture state machine and its settings
//! - `swipelog` – bounded history of recent swipes
//! - `worldtime` – simulation time and delta
pub mod appconfig;
pub mod pointer;
pub mod screensize;
pub mod subscribers;
pub mod swipedetector;
pub mod swipelog;
pub mod worldtime;
