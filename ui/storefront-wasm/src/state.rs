//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Never hold a borrow across a render: mutate with [`with_mut`], then read
//! with [`with`] to rebuild the views.

use anyhow::{Result, anyhow};
use glow_core::{
    Catalog, KeyValueStore, Persistence, ProductFilter, Storefront, StorefrontConfig,
};
use std::cell::RefCell;

/// `window.localStorage`. Unavailable storage surfaces as an error, which
/// the persistence layer logs and ignores.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow!("no window"))?
        .local_storage()
        .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
        .ok_or_else(|| anyhow!("localStorage unavailable"))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|e| anyhow!("getItem failed: {:?}", e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("setItem failed: {:?}", e))
    }
}

/// Central application state.
pub struct AppState {
    pub shop: Storefront<BrowserStorage>,
    pub config: StorefrontConfig,
    pub filter: ProductFilter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

impl AppState {
    pub fn new(config: StorefrontConfig) -> Self {
        let persistence = Persistence::new(BrowserStorage, config.storage_keys.clone());
        Self {
            shop: Storefront::new(Catalog::seed(), persistence),
            config,
            filter: ProductFilter::default(),
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the whole state, e.g. once configuration has been read.
pub fn install(state: AppState) {
    with_mut(|s| *s = state);
}

// ── Convenience accessor ──

pub fn config() -> StorefrontConfig {
    with(|s| s.config.clone())
}

