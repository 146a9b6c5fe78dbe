//! Ordered callback lists for events.
//!
//! Bevy observers are not ordered relative to each other. Consumers that rely
//! on delivery order register plain callbacks in a [`Subscribers<E>`]
//! resource instead; [`publish_observer`] forwards each `E` to them in
//! subscription order.
//!
//! ```ignore
//! world
//!     .resource_mut::<Subscribers<SwipeEvent>>()
//!     .subscribe(|swipe| println!("{:?}", swipe.direction));
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E) + Send + Sync>;

/// Callbacks for events of type `E`, called in subscription order.
#[derive(Resource)]
pub struct Subscribers<E: Send + Sync + 'static> {
    entries: Vec<(SubscriptionId, Callback<E>)>,
    next_id: u64,
}

impl<E: Send + Sync + 'static> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Send + Sync + 'static> Subscribers<E> {
    pub fn new() -> Self {
        Subscribers {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a callback; it runs after every earlier subscription.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call every subscriber with `event`.
    pub fn publish(&mut self, event: &E) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }
}

/// Observer forwarding `E` to the [`Subscribers<E>`] resource, if present.
pub fn publish_observer<E: Event + Send + Sync + 'static>(
    trigger: On<E>,
    subscribers: Option<ResMut<Subscribers<E>>>,
) {
    if let Some(mut subscribers) = subscribers {
        subscribers.publish(trigger.event());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_publish_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subs = Subscribers::<i32>::new();
        for tag in ["a", "b", "c"] {
            let seen = seen.clone();
            subs.subscribe(move |value: &i32| seen.lock().unwrap().push(format!("{tag}{value}")));
        }
        subs.publish(&1);
        assert_eq!(*seen.lock().unwrap(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut subs = Subscribers::<()>::new();
        let c = count.clone();
        let id = subs.subscribe(move |_| *c.lock().unwrap() += 1);
        assert_eq!(subs.len(), 1);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.publish(&());
        assert_eq!(*count.lock().unwrap(), 0);
        assert!(subs.is_empty());
    }
}
