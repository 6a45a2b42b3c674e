//! Product detail modal, share actions, and modal visibility.

use crate::dom::{self, Elements};
use crate::state;
use crate::toast;
use glow_core::{ModalKind, ShareLinks, format_price, markup};
use gloo_console as console;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

pub fn show(el: &Element) {
    dom::set_style(el, "display", "block");
    dom::set_style(&dom::body(), "overflow", "hidden");
}

pub fn hide(el: &Element) {
    dom::set_style(el, "display", "none");
    if !state::with(|s| s.shop.modals().any_open()) {
        dom::set_style(&dom::body(), "overflow", "");
    }
}

pub fn element_for(els: &Elements, kind: ModalKind) -> Option<&Element> {
    match kind {
        ModalKind::Product => els.product_modal.as_ref(),
        ModalKind::Checkout => els.checkout_modal.as_ref(),
    }
}

/// Look up `name`, fill the modal and show it. Unknown names are ignored.
pub fn open_product(els: &Elements, name: &str) {
    let opened = state::with_mut(|s| {
        let symbol = s.config.currency_symbol.clone();
        s.shop.open_product(name).map(|p| (p.clone(), symbol))
    });
    let (product, symbol) = match opened {
        Ok(found) => found,
        Err(err) => {
            console::warn!(err.to_string());
            return;
        }
    };

    if let Some(img) = &els.modal_image {
        img.set_src(&product.image);
    }
    if let Some(el) = &els.modal_title {
        dom::set_text(el, &product.name);
    }
    if let Some(el) = &els.modal_description {
        dom::set_text(el, &product.description);
    }
    if let Some(el) = &els.modal_price {
        dom::set_text(el, &format_price(&symbol, product.price));
    }
    if let Some(el) = &els.modal_benefits {
        dom::set_inner_html(el, &markup::benefit_items(&product));
    }
    if let Some(modal) = &els.product_modal {
        show(modal);
        if let Some(html) = modal.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
    }
}

pub fn close_product(els: &Elements) {
    if state::with_mut(|s| s.shop.close_product()) {
        if let Some(modal) = &els.product_modal {
            hide(modal);
        }
    }
}

/// Share links for the product currently in the modal.
pub fn current_share_links() -> Option<ShareLinks> {
    let name = state::with(|s| s.shop.modals().product().map(str::to_owned))?;
    let location = dom::window().location();
    let origin = location.origin().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    Some(ShareLinks::for_product(&origin, &path, &name))
}

pub fn share_whatsapp() {
    if let Some(links) = current_share_links() {
        let _ = dom::window().open_with_url_and_target(&links.whatsapp, "_blank");
    }
}

pub fn share_email() {
    if let Some(links) = current_share_links() {
        let _ = dom::window().location().set_href(&links.email);
    }
}

/// Copies the page link. Missing or denied clipboard access is ignored.
pub fn share_copy() {
    let Some(links) = current_share_links() else {
        return;
    };
    let navigator = dom::window().navigator();
    let has_clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if has_clipboard {
        let promise = navigator.clipboard().write_text(&links.page);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
    toast::show("Link copied");
}
