//! Explicit state container for the button's click count.
//!
//! No implicit reactivity: `set` stores the value and then calls every
//! subscribed observer. Whoever hosts the component subscribes and
//! decides what a change means (usually: schedule a redraw).

use std::fmt;

/// Handle returned by [`Counter::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(u64)>;

/// A non-negative integer with change observers.
pub struct Counter {
    value: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Counter {
    /// A counter at zero with no observers.
    pub fn new() -> Self {
        Counter {
            value: 0,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Store a new value and notify observers in subscription order.
    ///
    /// Observers run even when the value did not change.
    pub fn set(&mut self, value: u64) {
        self.value = value;
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
    }

    /// Register an observer called with the new value after every `set`.
    pub fn subscribe(&mut self, observer: impl FnMut(u64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new()
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
