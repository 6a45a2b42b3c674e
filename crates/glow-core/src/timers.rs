//! Cancellable timer slots.
//!
//! One pending timer per kind. Arming a kind hands back the displaced handle
//! so the caller can cancel it; for handles that cancel on drop (such as
//! `gloo_timers::callback::Timeout`) simply dropping it is enough.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    SearchDebounce,
    CheckoutLatency,
    ToastDismiss,
    NewsletterReset,
}

#[derive(Debug)]
pub struct TimerSlots<H> {
    slots: HashMap<TimerKind, H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H> TimerSlots<H> {
    /// Store `handle` for `kind`, returning whatever was pending before.
    #[must_use = "the displaced handle must be cancelled or dropped"]
    pub fn arm(&mut self, kind: TimerKind, handle: H) -> Option<H> {
        self.slots.insert(kind, handle)
    }

    pub fn disarm(&mut self, kind: TimerKind) -> Option<H> {
        self.slots.remove(&kind)
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slots.contains_key(&kind)
    }
}
