//! Systems.
//!
//! Submodules overview
//! - [`input`] – read raylib touch/mouse/keyboard into [`crate::resources::pointer::PointerInput`] (feature `raylib`)
//! - [`render`] – debug HUD for the demo window (feature `raylib`)
//! - [`swipe`] – run the swipe detector and trigger swipe events
//! - [`time`] – update simulation time and advance countdown timers

#[cfg(feature = "raylib")]
pub mod input;
#[cfg(feature = "raylib")]
pub mod render;
pub mod swipe;
pub mod time;
