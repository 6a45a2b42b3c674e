//! Storefront tunables.
//!
//! Every field has a default matching the shipped landing page; a JSON
//! document may override any subset of them.

use crate::timers::TimerKind;
use glow_storage::StorageKeys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub storage_keys: StorageKeys,
    pub currency_symbol: String,
    pub search_debounce_ms: u32,
    pub checkout_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
    pub newsletter_reset_ms: u32,
    pub back_to_top_threshold_px: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_keys: StorageKeys::default(),
            currency_symbol: "₦".to_owned(),
            search_debounce_ms: 200,
            checkout_delay_ms: 1200,
            toast_visible_ms: 2500,
            toast_fade_ms: 300,
            newsletter_reset_ms: 3000,
            back_to_top_threshold_px: 300.0,
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn delay_ms(&self, kind: TimerKind) -> u32 {
        match kind {
            TimerKind::SearchDebounce => self.search_debounce_ms,
            TimerKind::CheckoutLatency => self.checkout_delay_ms,
            TimerKind::ToastDismiss => self.toast_visible_ms,
            TimerKind::NewsletterReset => self.newsletter_reset_ms,
        }
    }

    pub fn shows_back_to_top(&self, scroll_y: f64) -> bool {
        scroll_y > self.back_to_top_threshold_px
    }
}
