//! Crouch Notifications
//!
//! Synchronous observer list notified whenever the character enters or leaves
//! crouch. Observers run in the same call that changed the mode.

use std::fmt;

/// Handle returned by [`CrouchChangedBroadcast::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(bool) + Send>;

/// Observers of crouch state changes.
#[derive(Default)]
pub struct CrouchChangedBroadcast {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl fmt::Debug for CrouchChangedBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrouchChangedBroadcast")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CrouchChangedBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer called with `true` on crouch and `false` on uncrouch.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(bool) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every observer.
    pub fn broadcast(&mut self, is_crouching: bool) {
        log::debug!(
            "crouch changed: {is_crouching} ({} observers)",
            self.observers.len()
        );
        for (_, observer) in &mut self.observers {
            observer(is_crouching);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl FnMut(bool) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    #[test]
    fn test_broadcast_reaches_all_observers() {
        let mut broadcast = CrouchChangedBroadcast::new();
        let (first, observer) = recorder();
        broadcast.subscribe(observer);
        let (second, observer) = recorder();
        broadcast.subscribe(observer);

        broadcast.broadcast(true);
        broadcast.broadcast(false);

        assert_eq!(*first.lock().unwrap(), vec![true, false]);
        assert_eq!(*second.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut broadcast = CrouchChangedBroadcast::new();
        let (seen, observer) = recorder();
        let id = broadcast.subscribe(observer);

        assert!(broadcast.unsubscribe(id));
        assert!(!broadcast.unsubscribe(id));
        assert!(broadcast.is_empty());

        broadcast.broadcast(true);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut broadcast = CrouchChangedBroadcast::new();
        let a = broadcast.subscribe(|_| {});
        let b = broadcast.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(broadcast.len(), 2);
    }
}
