//! Swipetick library.
//!
//! Swipe gesture detection and countdown timers for a `bevy_ecs` world
//! advanced once per frame. This module exposes the components, resources,
//! systems, and events for use in integration tests and as a reusable
//! library.

pub mod app;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
