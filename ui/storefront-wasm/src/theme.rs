//! Dark mode.
//!
//! A single `dark-mode` class on `<body>`, persisted as `"1"` / `"0"`.

use crate::dom;
use crate::state;

pub fn is_dark() -> bool {
    dom::has_class(&dom::body(), "dark-mode")
}

pub fn set_dark(enabled: bool) {
    dom::toggle_class(&dom::body(), "dark-mode", enabled);
    state::with(|s| s.shop.set_dark_mode(enabled));
}

/// Apply the stored preference at load.
pub fn restore() {
    let enabled = state::with(|s| s.shop.dark_mode());
    set_dark(enabled);
}

pub fn toggle() {
    set_dark(!is_dark());
}
