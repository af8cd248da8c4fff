//! The button component: a fixed label plus a click counter.
//!
//! Mounting creates a fresh instance at zero; unmounting is dropping it.
//! Activation is the only mutation and it cannot fail.

use tracing::debug;

use crate::counter::{Counter, SubscriptionId};

/// Fixed label text; the count is appended after a single space.
pub const LABEL_PREFIX: &str = "esto es un boton";

/// Button with an internal counter of activations since mount.
#[derive(Debug)]
pub struct Button {
    counter: Counter,
}

impl Button {
    /// Mount a new button. The counter starts at zero.
    pub fn mount() -> Self {
        debug!("button mounted");
        Button {
            counter: Counter::new(),
        }
    }

    /// Handle one activation (click, Enter, Space): count goes up by one.
    pub fn activate(&mut self) {
        let next = self.counter.get().saturating_add(1);
        self.counter.set(next);
        debug!(count = next, "button activated");
    }

    /// Activations observed since mount.
    pub fn count(&self) -> u64 {
        self.counter.get()
    }

    /// Text the button displays for its current count.
    pub fn label(&self) -> String {
        label_for(self.count())
    }

    /// Subscribe to counter changes. The host uses this to schedule redraws.
    pub fn on_change(&mut self, observer: impl FnMut(u64) + 'static) -> SubscriptionId {
        self.counter.subscribe(observer)
    }
}

impl Drop for Button {
    fn drop(&mut self) {
        debug!(count = self.counter.get(), "button unmounted");
    }
}

/// Label text for a given count.
pub fn label_for(count: u64) -> String {
    format!("{} {}", LABEL_PREFIX, count)
}

// ============================================================================
// TESTS
// ============================================================================
