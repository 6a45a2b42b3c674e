//! Glow storefront state, independent of the browser.
//!
//! The wasm front end drives a [`Storefront`] from DOM events and renders the
//! fragments in [`markup`]; everything here runs and tests on the host.

pub mod config;
pub mod error;
pub mod markup;
pub mod modal;
pub mod share;
pub mod store;
pub mod timers;

pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use glow_catalog::{Catalog, ProductFilter};
pub use glow_storage::{InMemoryStore, KeyValueStore, NoopStore, Persistence, StorageKeys};
pub use glow_types::{CartBundle, CartLine, PriceRange, Product, format_price};
pub use modal::{CheckoutPhase, ModalKind, Modals};
pub use share::{ShareLinks, product_from_query};
pub use store::{
    CartGroup, MAX_QUANTITY, Step, StoreEvent, Storefront, group_lines, parse_quantity,
    step_quantity,
};
pub use timers::{TimerKind, TimerSlots};
