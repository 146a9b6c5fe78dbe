//! Event types and observers.
//!
//! Events decouple the detectors and timers from whoever reacts to them.
//! Observers (`On<E>`) run synchronously when the triggering commands are
//! applied. They are not ordered relative to each other; use
//! [`Subscribers`](crate::resources::subscribers::Subscribers) when delivery
//! order matters.
//!
//! Submodules:
//! - [`countdown`] – countdown start/update/finish notifications and control requests
//! - [`swipe`] – swipe gestures emitted by the swipe detector
pub mod countdown;
pub mod swipe;
