//! Toast notifications.
//!
//! One toast at a time: a new one replaces whatever is still showing.

use crate::dom;
use crate::state;
use crate::timers;
use glow_core::TimerKind;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

thread_local! {
    static CURRENT: RefCell<Option<Element>> = const { RefCell::new(None) };
}

pub fn show(message: &str) {
    if let Some(previous) = CURRENT.with(|c| c.borrow_mut().take()) {
        previous.remove();
    }

    let Ok(toast) = dom::document().create_element("div") else {
        return;
    };
    toast.set_class_name("toast success");
    dom::set_text(&toast, message);
    if dom::body().append_child(&toast).is_err() {
        return;
    }

    // Class added a frame later so the CSS transition runs.
    let fade_in = toast.clone();
    let cb = Closure::once_into_js(move || dom::add_class(&fade_in, "visible"));
    let _ = dom::window().request_animation_frame(cb.unchecked_ref());

    CURRENT.with(|c| *c.borrow_mut() = Some(toast.clone()));

    let fade_ms = state::config().toast_fade_ms;
    timers::schedule(TimerKind::ToastDismiss, move || {
        dom::remove_class(&toast, "visible");
        Timeout::new(fade_ms, move || {
            toast.remove();
            CURRENT.with(|c| {
                let mut current = c.borrow_mut();
                if current.as_ref() == Some(&toast) {
                    *current = None;
                }
            });
        })
        .forget();
    });
}
