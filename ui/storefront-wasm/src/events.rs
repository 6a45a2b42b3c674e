//! Event binding.
//!
//! Wires all UI event listeners. The product grid and cart list use
//! delegated listeners so re-rendered children need no rewiring.

use crate::checkout;
use crate::dom::{self, Elements};
use crate::modal;
use crate::render;
use crate::state;
use crate::theme;
use crate::timers;
use crate::widgets;
use glow_core::{ProductFilter, Step, TimerKind, parse_quantity, step_quantity};
use gloo_console as console;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, HtmlInputElement, KeyboardEvent, MouseEvent, Node};

/// Attach `handler` for `event` on `target` for the lifetime of the page.
fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    dyn FnMut(E): WasmClosure,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        console::error!(format!("failed to bind '{event}' listener"), err);
    }
    cb.forget();
}

/// Helper: attach a click handler that receives the bound elements.
macro_rules! on_click {
    ($el:expr, $els:expr, $handler:expr) => {{
        if let Some(el) = &$el {
            let els = $els.clone();
            listen(el, "click", move |_: MouseEvent| $handler(&els));
        }
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Product grid (delegated) ──
    if let Some(grid) = &els.product_grid {
        let els2 = els.clone();
        listen(grid, "click", move |e: MouseEvent| {
            if let Some(target) = dom::event_element(&e) {
                on_grid_click(&els2, &target);
            }
        });
    }

    // ── Cart ──
    {
        let els2 = els.clone();
        listen(&dom::document(), "click", move |e: MouseEvent| {
            let Some(target) = dom::event_element(&e) else {
                widgets::close_mini_cart_outside(&els2, None);
                return;
            };
            if let Some(remove) = dom::closest(&target, ".remove-item") {
                if let Some(name) = remove.get_attribute("data-name") {
                    on_remove(&els2, &name);
                }
            }
            let node: &Node = &target;
            widgets::close_mini_cart_outside(&els2, Some(node));
        });
    }
    on_click!(els.cart_badge, els, widgets::toggle_mini_cart);

    // ── Search & filter ──
    if let Some(input) = &els.search_input {
        let els2 = els.clone();
        listen(input, "input", move |_: web_sys::Event| {
            let els3 = els2.clone();
            timers::schedule(TimerKind::SearchDebounce, move || filter_products(&els3));
        });
    }
    if let Some(select) = &els.price_filter {
        let els2 = els.clone();
        listen(select, "change", move |_: web_sys::Event| {
            timers::cancel(TimerKind::SearchDebounce);
            filter_products(&els2);
        });
    }

    // ── Product modal ──
    if let Some(product_modal) = &els.product_modal {
        let els2 = els.clone();
        let modal_el = product_modal.clone();
        listen(product_modal, "click", move |e: MouseEvent| {
            if let Some(target) = dom::event_element(&e) {
                if target == modal_el || dom::has_class(&target, "close") {
                    modal::close_product(&els2);
                }
            }
        });
    }
    {
        let els2 = els.clone();
        listen(&dom::window(), "keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_escape(&els2);
            }
        });
    }
    on_click!(els.share_whatsapp, els, |_: &Elements| modal::share_whatsapp());
    on_click!(els.share_email, els, |_: &Elements| modal::share_email());
    on_click!(els.share_copy, els, |_: &Elements| modal::share_copy());

    // ── Checkout ──
    on_click!(els.checkout_btn, els, checkout::on_open);
    on_click!(els.checkout_close, els, checkout::on_close);
    if let Some(checkout_modal) = &els.checkout_modal {
        let els2 = els.clone();
        let modal_el = checkout_modal.clone();
        listen(checkout_modal, "click", move |e: MouseEvent| {
            if dom::event_element(&e).is_some_and(|t| t == modal_el) {
                checkout::on_close(&els2);
            }
        });
    }
    if let Some(form) = &els.checkout_form {
        let els2 = els.clone();
        listen(form, "submit", move |e: web_sys::Event| {
            e.prevent_default();
            checkout::on_submit(&els2);
        });
    }
    on_click!(els.checkout_footer_complete, els, checkout::on_footer_complete);

    // ── Ambient widgets ──
    if els.back_to_top.is_some() {
        let els2 = els.clone();
        listen(&dom::window(), "scroll", move |_: web_sys::Event| {
            widgets::update_back_to_top(&els2);
        });
    }
    on_click!(els.back_to_top, els, |_: &Elements| widgets::scroll_to_top());
    if let Some(form) = &els.newsletter_form {
        let els2 = els.clone();
        listen(form, "submit", move |e: web_sys::Event| {
            e.prevent_default();
            widgets::on_newsletter_submit(&els2);
        });
    }
    on_click!(els.dark_mode_toggle, els, |_: &Elements| theme::toggle());
    on_click!(els.hamburger, els, widgets::toggle_nav);
}

fn on_grid_click(els: &Elements, target: &Element) {
    if let Some(btn) = dom::closest(target, ".add-cart") {
        on_add_to_cart(els, &btn);
    } else if let Some(btn) = dom::closest(target, ".wishlist-btn") {
        on_toggle_wishlist(&btn);
    } else if let Some(btn) = dom::closest(target, ".view-details") {
        if let Some(name) = btn.get_attribute("data-name") {
            modal::open_product(els, &name);
        }
    } else if let Some(btn) = dom::closest(target, ".qty-btn") {
        on_step_quantity(&btn);
    }
}

fn qty_input_for(btn: &Element) -> Option<HtmlInputElement> {
    dom::closest(btn, ".product-card")?
        .query_selector(".qty-input")
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

fn on_add_to_cart(els: &Elements, btn: &Element) {
    let Some(name) = btn.get_attribute("data-name") else {
        return;
    };
    let price = btn
        .get_attribute("data-price")
        .and_then(|p| p.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let qty_input = qty_input_for(btn);
    let qty = qty_input.as_ref().map_or(1, |input| parse_quantity(&input.value()));

    match state::with_mut(|s| s.shop.add_to_cart(&name, price, qty)) {
        Ok(event) => {
            render::apply(els, &event);
            if let Some(input) = qty_input {
                input.set_value("1");
            }
        }
        Err(err) => console::warn!(err.to_string()),
    }
}

fn on_toggle_wishlist(btn: &Element) {
    let Some(name) = btn.get_attribute("data-product").filter(|n| !n.is_empty()) else {
        return;
    };
    match state::with_mut(|s| s.shop.toggle_wishlist(&name)) {
        Ok(event) => {
            let wishlisted = state::with(|s| s.shop.is_wishlisted(&name));
            dom::set_text(btn, glow_core::markup::wishlist_glyph(wishlisted));
            crate::toast::show(&event.toast());
        }
        Err(err) => console::warn!(err.to_string()),
    }
}

fn on_step_quantity(btn: &Element) {
    let Some(input) = qty_input_for(btn) else {
        return;
    };
    let step = if dom::has_class(btn, "plus") {
        Step::Plus
    } else if dom::has_class(btn, "minus") {
        Step::Minus
    } else {
        return;
    };
    input.set_value(&step_quantity(&input.value(), step).to_string());
}

fn on_remove(els: &Elements, name: &str) {
    if let Some(event) = state::with_mut(|s| s.shop.remove_from_cart(name)) {
        render::apply(els, &event);
    }
}

fn filter_products(els: &Elements) {
    let term = els
        .search_input
        .as_ref()
        .map(dom::control_value)
        .unwrap_or_default();
    let range = els
        .price_filter
        .as_ref()
        .map(dom::control_value)
        .unwrap_or_default();
    state::with_mut(|s| s.filter = ProductFilter::from_inputs(&term, &range));
    render::render_products(els);
}

fn on_escape(els: &Elements) {
    if let Some(kind) = state::with_mut(|s| s.shop.dismiss_modal()) {
        if let Some(el) = modal::element_for(els, kind) {
            modal::hide(el);
        }
    }
}
