//! DOM element bindings.
//!
//! All page elements are resolved once at startup. Every widget is optional:
//! a missing element disables the feature that needs it and nothing else.

use gloo_console as console;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlInputElement, HtmlSelectElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_typed<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|e| e.dyn_into::<T>().ok())
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let Ok(nl) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Nearest ancestor-or-self of `el` matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Current value of an `<input>` or `<select>`; empty for anything else.
pub fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_disabled(buttons: &[HtmlButtonElement], disabled: bool) {
    for button in buttons {
        button.set_disabled(disabled);
    }
}

// ── Elements struct ──

/// All DOM element references used by the storefront.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Catalog
    pub product_grid: Option<Element>,
    pub search_input: Option<Element>,
    pub price_filter: Option<Element>,

    // Cart
    pub cart_items: Option<Element>,
    pub cart_total: Option<Element>,
    pub cart_badge: Option<Element>,
    pub mini_cart: Option<Element>,

    // Product modal
    pub product_modal: Option<Element>,
    pub modal_image: Option<HtmlImageElement>,
    pub modal_title: Option<Element>,
    pub modal_description: Option<Element>,
    pub modal_price: Option<Element>,
    pub modal_benefits: Option<Element>,
    pub share_whatsapp: Option<Element>,
    pub share_email: Option<Element>,
    pub share_copy: Option<Element>,

    // Checkout modal
    pub checkout_modal: Option<Element>,
    pub checkout_items: Option<Element>,
    pub checkout_total: Option<Element>,
    pub checkout_footer_total: Option<Element>,
    pub checkout_btn: Option<Element>,
    pub checkout_close: Option<Element>,
    pub checkout_form: Option<HtmlFormElement>,
    pub checkout_footer_complete: Option<Element>,

    // Ambient widgets
    pub back_to_top: Option<Element>,
    pub newsletter_form: Option<HtmlFormElement>,
    pub newsletter_message: Option<Element>,
    pub dark_mode_toggle: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav_links: Option<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Elements {
        let els = Elements {
            product_grid: query("#product-grid"),
            search_input: query("#search-input"),
            price_filter: query("#price-filter"),

            cart_items: query("#cart-items"),
            cart_total: query("#cart-total"),
            cart_badge: query("#cart-badge"),
            mini_cart: query("#mini-cart"),

            product_modal: query("#product-modal"),
            modal_image: query_typed("#modal-image"),
            modal_title: query("#modal-title"),
            modal_description: query("#modal-description"),
            modal_price: query("#modal-price"),
            modal_benefits: query("#modal-benefits"),
            share_whatsapp: query("#share-whatsapp"),
            share_email: query("#share-email"),
            share_copy: query("#share-copy"),

            checkout_modal: query("#checkout-modal"),
            checkout_items: query("#checkout-items"),
            checkout_total: query("#checkout-total"),
            checkout_footer_total: query("#checkout-footer-total"),
            checkout_btn: query("#checkout-btn"),
            checkout_close: query("#checkout-close"),
            checkout_form: query_typed("#checkout-form"),
            checkout_footer_complete: query("#checkout-complete-footer"),

            back_to_top: query("#back-to-top"),
            newsletter_form: query_typed("#newsletter-form"),
            newsletter_message: query("#newsletter-message"),
            dark_mode_toggle: query("#dark-mode-toggle"),
            hamburger: query("#hamburger"),
            nav_links: query("#nav-links"),
        };

        if els.product_grid.is_none() {
            console::error!("Missing #product-grid element — products cannot render");
        }
        els
    }

    /// Submit controls that must be disabled while an order is processing.
    pub fn checkout_buttons(&self) -> Vec<HtmlButtonElement> {
        let mut buttons: Vec<HtmlButtonElement> = self
            .checkout_form
            .as_ref()
            .map(|form| {
                query_all_within(form, r#"button[type="submit"], .complete-order-btn"#)
                    .into_iter()
                    .filter_map(|el| el.dyn_into::<HtmlButtonElement>().ok())
                    .collect()
            })
            .unwrap_or_default();
        if let Some(footer) = self
            .checkout_footer_complete
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlButtonElement>())
        {
            if !buttons.iter().any(|b| b == footer) {
                buttons.push(footer.clone());
            }
        }
        buttons
    }
}
