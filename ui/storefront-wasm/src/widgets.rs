//! Ambient page widgets: mini-cart popover, back-to-top, newsletter,
//! mobile navigation.

use crate::dom::{self, Elements};
use crate::state;
use crate::timers;
use glow_core::TimerKind;
use web_sys::{Element, Node, ScrollBehavior, ScrollToOptions};

const NEWSLETTER_THANKS: &str = "✓ Thank you! Check your email for your 15% discount code!";

fn sync_mini_cart_aria(badge: &Element, mini: &Element) {
    let open = dom::has_class(mini, "show");
    let _ = badge.set_attribute("aria-expanded", &open.to_string());
    let _ = mini.set_attribute("aria-hidden", &(!open).to_string());
}

pub fn toggle_mini_cart(els: &Elements) {
    if let (Some(badge), Some(mini)) = (&els.cart_badge, &els.mini_cart) {
        let open = !dom::has_class(mini, "show");
        dom::toggle_class(mini, "show", open);
        sync_mini_cart_aria(badge, mini);
    }
}

/// Clicks anywhere outside the badge and popover close the popover.
pub fn close_mini_cart_outside(els: &Elements, target: Option<&Node>) {
    if let (Some(badge), Some(mini)) = (&els.cart_badge, &els.mini_cart) {
        if !mini.contains(target) && !badge.contains(target) && dom::has_class(mini, "show") {
            dom::remove_class(mini, "show");
            sync_mini_cart_aria(badge, mini);
        }
    }
}

pub fn update_back_to_top(els: &Elements) {
    if let Some(btn) = &els.back_to_top {
        let scroll_y = dom::window().scroll_y().unwrap_or(0.0);
        let show = state::with(|s| s.config.shows_back_to_top(scroll_y));
        dom::toggle_class(btn, "show", show);
    }
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

/// Client-only subscription: show the thanks message, clear it later.
pub fn on_newsletter_submit(els: &Elements) {
    if let Some(msg) = &els.newsletter_message {
        dom::set_text(msg, NEWSLETTER_THANKS);
    }
    let els2 = els.clone();
    timers::schedule(TimerKind::NewsletterReset, move || {
        if let Some(form) = &els2.newsletter_form {
            form.reset();
        }
        if let Some(msg) = &els2.newsletter_message {
            dom::set_text(msg, "");
        }
    });
}

pub fn toggle_nav(els: &Elements) {
    if let Some(nav) = &els.nav_links {
        let open = !dom::has_class(nav, "open");
        dom::toggle_class(nav, "open", open);
    }
}
