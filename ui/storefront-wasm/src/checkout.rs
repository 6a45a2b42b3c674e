//! Checkout modal flow.
//!
//! Open (refused on an empty cart) → submit → simulated latency →
//! completion clears the cart and closes. Only one completion timer can be
//! pending; a second submit while processing is ignored by the store.

use crate::dom::{self, Elements};
use crate::modal;
use crate::render;
use crate::state;
use crate::timers;
use glow_core::{StorefrontError, TimerKind};
use gloo_console as console;

pub fn on_open(els: &Elements) {
    match state::with_mut(|s| s.shop.open_checkout()) {
        Ok(()) => {
            render::populate_checkout(els);
            if let Some(el) = &els.checkout_modal {
                modal::show(el);
            }
        }
        Err(err @ StorefrontError::EmptyCart) => {
            let _ = dom::window().alert_with_message(&err.to_string());
        }
        Err(err) => console::warn!(err.to_string()),
    }
}

pub fn on_close(els: &Elements) {
    if state::with_mut(|s| s.shop.close_checkout()) {
        if let Some(el) = &els.checkout_modal {
            modal::hide(el);
        }
    }
}

pub fn on_submit(els: &Elements) {
    if let Err(err) = state::with_mut(|s| s.shop.submit_checkout()) {
        console::log!(format!("checkout submit ignored: {err}"));
        return;
    }

    let buttons = els.checkout_buttons();
    dom::set_disabled(&buttons, true);

    let els2 = els.clone();
    timers::schedule(TimerKind::CheckoutLatency, move || {
        complete(&els2);
        dom::set_disabled(&buttons, false);
    });
}

fn complete(els: &Elements) {
    let event = match state::with_mut(|s| s.shop.complete_checkout()) {
        Ok(event) => event,
        Err(err) => {
            console::warn!(err.to_string());
            return;
        }
    };

    render::apply(els, &event);
    if let Some(el) = &els.checkout_modal {
        modal::hide(el);
    }
    if let Some(form) = &els.checkout_form {
        form.reset();
    }
}

/// Footer "complete order" button outside the form submits it.
pub fn on_footer_complete(els: &Elements) {
    if let Some(form) = &els.checkout_form {
        if form.request_submit().is_err() {
            on_submit(els);
        }
    }
}
