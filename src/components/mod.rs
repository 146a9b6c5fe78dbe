//! ECS components for entities.
//!
//! Submodules overview:
//! - [`countdown`] – fixed-step countdown timer with start/update/finish notifications

pub mod countdown;
