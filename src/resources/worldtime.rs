//! Simulation time resource.
//!
//! Written once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time); read by
//! anything that advances with time, such as countdown timers.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    /// Multiplier applied to raw frame time. 0 pauses timers.
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
