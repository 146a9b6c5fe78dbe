//! Recent swipe history.
//!
//! Keeps the last few [`SwipeEvent`]s for on-screen display and diagnostics.
//! Filled by [`record_swipe_observer`].

use std::collections::VecDeque;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::swipe::SwipeEvent;

const DEFAULT_CAPACITY: usize = 8;

/// Bounded, oldest-first list of recent swipes.
#[derive(Resource, Debug, Clone)]
pub struct SwipeLog {
    entries: VecDeque<SwipeEvent>,
    capacity: usize,
    /// Swipes seen since creation, including evicted ones.
    pub total: u64,
}

impl Default for SwipeLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SwipeLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    pub fn push(&mut self, event: SwipeEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
        self.total += 1;
    }

    pub fn last(&self) -> Option<&SwipeEvent> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwipeEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Observer that appends every swipe to the [`SwipeLog`] resource, if present.
pub fn record_swipe_observer(trigger: On<SwipeEvent>, log: Option<ResMut<SwipeLog>>) {
    if let Some(mut log) = log {
        log.push(*trigger.event());
    }
}
