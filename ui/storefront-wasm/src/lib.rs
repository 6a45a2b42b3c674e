//! Glow storefront WASM front end.
//!
//! Drives the browser page from a [`glow_core::Storefront`]: the DOM is only
//! ever rebuilt from that state, never read back into it.

pub mod checkout;
pub mod dom;
pub mod events;
pub mod logging;
pub mod modal;
pub mod render;
pub mod state;
pub mod theme;
pub mod timers;
pub mod toast;
pub mod widgets;

use glow_core::{StorefrontConfig, product_from_query};
use gloo_console as console;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    init();
    Ok(())
}

/// Optional JSON overrides from `<script type="application/json" id="storefront-config">`.
fn read_config() -> StorefrontConfig {
    let Some(raw) = dom::query("#storefront-config").and_then(|el| el.text_content()) else {
        return StorefrontConfig::default();
    };
    StorefrontConfig::from_json(&raw).unwrap_or_else(|err| {
        console::warn!(format!("ignoring invalid storefront config: {err}"));
        StorefrontConfig::default()
    })
}

fn init() {
    state::install(state::AppState::new(read_config()));
    let els = dom::Elements::bind();

    // Saved cart and wishlist before the first render.
    state::with_mut(|s| s.shop.hydrate());
    theme::restore();

    render::render_products(&els);
    render::update_cart_ui(&els);
    widgets::update_back_to_top(&els);

    events::bind_events(&els);

    // Deep link: ?product=<name>
    let search = dom::window().location().search().unwrap_or_default();
    if let Some(name) = product_from_query(&search) {
        modal::open_product(&els, &name);
    }

    console::log!(
        "%cScript initialized — products rendered",
        "color: green; font-weight: 700"
    );
}
