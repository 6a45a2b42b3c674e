//! Render layer: rebuilds DOM fragments from the current state.
//!
//! Every call clears and rebuilds its container from the full state.

use crate::dom::{self, Elements};
use crate::state;
use crate::toast;
use glow_core::{StoreEvent, markup};

/// Product grid for the active filter.
pub fn render_products(els: &Elements) {
    let Some(grid) = &els.product_grid else {
        return;
    };
    let html = state::with(|s| {
        let products = s.shop.catalog().filter(&s.filter);
        markup::product_grid(
            &products,
            |name| s.shop.is_wishlisted(name),
            &s.config.currency_symbol,
        )
    });
    dom::set_inner_html(grid, &html);
}

/// Cart list, badge, total and mini popover.
pub fn update_cart_ui(els: &Elements) {
    let (groups, lines, total, symbol) = state::with(|s| {
        (
            s.shop.groups(),
            s.shop.cart().len(),
            s.shop.total(),
            s.config.currency_symbol.clone(),
        )
    });

    if let Some(list) = &els.cart_items {
        dom::set_inner_html(list, &markup::cart_items(&groups));
    }
    if let Some(badge) = &els.cart_badge {
        dom::set_text(badge, &lines.to_string());
    }
    if let Some(el) = &els.cart_total {
        dom::set_text(el, &markup::cart_total(total, &symbol));
    }
    if let Some(mini) = &els.mini_cart {
        dom::set_inner_html(mini, &markup::mini_cart(&groups, total, &symbol));
    }
}

/// Checkout summary lines and both totals.
pub fn populate_checkout(els: &Elements) {
    let (groups, total, symbol) = state::with(|s| {
        (
            s.shop.groups(),
            s.shop.total(),
            s.config.currency_symbol.clone(),
        )
    });

    if let Some(items) = &els.checkout_items {
        dom::set_inner_html(items, &markup::checkout_items(&groups, &symbol));
    }
    if let Some(el) = &els.checkout_total {
        dom::set_text(el, &glow_core::format_price(&symbol, total));
    }
    if let Some(el) = &els.checkout_footer_total {
        dom::set_text(el, &markup::cart_total(total, &symbol));
    }
}

/// Re-render whatever a store event touched and confirm it with a toast.
pub fn apply(els: &Elements, event: &StoreEvent) {
    if event.touches_cart() {
        update_cart_ui(els);
    }
    toast::show(&event.toast());
}
