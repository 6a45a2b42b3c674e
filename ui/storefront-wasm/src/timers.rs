//! Browser timers, one pending per kind.
//!
//! Scheduling a kind that is already pending cancels the earlier timer
//! (dropping a `gloo_timers` `Timeout` clears it). The debounce, checkout,
//! toast and newsletter delays all go through here.

use crate::state;
use glow_core::{TimerKind, TimerSlots};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;

thread_local! {
    static TIMERS: RefCell<TimerSlots<Timeout>> = RefCell::new(TimerSlots::default());
}

/// Run `f` after the configured delay for `kind`.
pub fn schedule<F>(kind: TimerKind, f: F)
where
    F: FnOnce() + 'static,
{
    let delay = state::config().delay_ms(kind);
    schedule_in(kind, delay, f);
}

pub fn schedule_in<F>(kind: TimerKind, delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let timeout = Timeout::new(delay_ms, f);
    let displaced = TIMERS.with(|t| t.borrow_mut().arm(kind, timeout));
    // Dropped outside the borrow.
    drop(displaced);
}

pub fn cancel(kind: TimerKind) {
    let displaced = TIMERS.with(|t| t.borrow_mut().disarm(kind));
    drop(displaced);
}
