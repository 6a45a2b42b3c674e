//! Cart, wishlist and modal state behind one store object.
//!
//! Every mutation persists immediately and returns a [`StoreEvent`] the UI
//! layer uses to pick what to re-render and which toast to show. The total
//! is never stored independently: it is recomputed from the cart lines on
//! every change.

use crate::error::StorefrontError;
use crate::modal::{ModalKind, Modals};
use glow_catalog::Catalog;
use glow_storage::{KeyValueStore, Persistence, StorageKeys};
use glow_types::{CartBundle, CartLine, Product};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CartAdded { name: String, quantity: u32 },
    CartRemoved { name: String },
    WishlistToggled { name: String, added: bool },
    CheckoutCompleted,
}

impl StoreEvent {
    /// Confirmation text shown to the shopper.
    pub fn toast(&self) -> String {
        match self {
            Self::CartAdded { name, .. } => format!("✓ {name} added to cart"),
            Self::CartRemoved { .. } => "Removed from cart".to_owned(),
            Self::WishlistToggled { added: true, .. } => "Added to wishlist".to_owned(),
            Self::WishlistToggled { added: false, .. } => "Removed from wishlist".to_owned(),
            Self::CheckoutCompleted => "Order completed — thank you!".to_owned(),
        }
    }

    pub fn touches_cart(&self) -> bool {
        !matches!(self, Self::WishlistToggled { .. })
    }
}

/// Cart lines for one product, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartGroup {
    pub name: String,
    pub unit_price: u64,
    pub count: usize,
    pub subtotal: u64,
}

pub fn group_lines(lines: &[CartLine]) -> Vec<CartGroup> {
    let mut groups: Vec<CartGroup> = Vec::new();
    for line in lines {
        match groups.iter_mut().find(|g| g.name == line.name) {
            Some(group) => {
                group.count += 1;
                group.subtotal = group.subtotal.saturating_add(line.price);
            }
            None => groups.push(CartGroup {
                name: line.name.clone(),
                unit_price: line.price,
                count: 1,
                subtotal: line.price,
            }),
        }
    }
    groups
}

/// Largest quantity a single add accepts.
pub const MAX_QUANTITY: u32 = 999;

/// Parses a quantity input the way the stepper does: leading integer,
/// anything unparseable or below one becomes 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    digits.parse::<u32>().unwrap_or(MAX_QUANTITY).clamp(1, MAX_QUANTITY)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Plus,
    Minus,
}

/// Next stepper value for the current input text.
pub fn step_quantity(raw: &str, step: Step) -> u32 {
    let current = parse_quantity(raw);
    match step {
        Step::Plus => current.saturating_add(1).min(MAX_QUANTITY),
        Step::Minus => current.saturating_sub(1).max(1),
    }
}

pub struct Storefront<S> {
    catalog: Catalog,
    persistence: Persistence<S>,
    cart: Vec<CartLine>,
    wishlist: Vec<String>,
    total: u64,
    modals: Modals,
}

impl<S: KeyValueStore + Default> Default for Storefront<S> {
    fn default() -> Self {
        Self::new(
            Catalog::seed(),
            Persistence::new(S::default(), StorageKeys::default()),
        )
    }
}

impl<S: KeyValueStore> Storefront<S> {
    /// Empty store; call [`Storefront::hydrate`] to load persisted state.
    pub fn new(catalog: Catalog, persistence: Persistence<S>) -> Self {
        Self {
            catalog,
            persistence,
            cart: Vec::new(),
            wishlist: Vec::new(),
            total: 0,
            modals: Modals::default(),
        }
    }

    /// Replaces in-memory cart and wishlist with what storage holds.
    ///
    /// The persisted total is ignored and recomputed. Lines and wishlist
    /// entries naming products that no longer exist are dropped, and kept
    /// lines take the catalog price.
    pub fn hydrate(&mut self) {
        let mut wishlist: Vec<String> = Vec::new();
        for name in self.persistence.load_wishlist() {
            if self.catalog.contains(&name) && !wishlist.contains(&name) {
                wishlist.push(name);
            }
        }
        self.wishlist = wishlist;

        let CartBundle { cart, total } = self.persistence.load_cart();
        let before = cart.len();
        let mut repriced = 0usize;
        self.cart = cart
            .into_iter()
            .filter_map(|line| {
                let product = self.catalog.get(&line.name)?;
                if line.price != product.price {
                    repriced += 1;
                }
                Some(CartLine {
                    name: line.name,
                    price: product.price,
                })
            })
            .collect();
        if repriced > 0 {
            warn!("repriced {repriced} persisted cart line(s) from the catalog");
        }
        if self.cart.len() != before {
            warn!(
                "dropped {} persisted cart line(s) for unknown products",
                before - self.cart.len()
            );
        }
        self.recompute_total();
        if self.total != total {
            debug!(persisted = total, recomputed = self.total, "cart total corrected on load");
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn groups(&self) -> Vec<CartGroup> {
        group_lines(&self.cart)
    }

    pub fn wishlist(&self) -> &[String] {
        &self.wishlist
    }

    pub fn is_wishlisted(&self, name: &str) -> bool {
        self.wishlist.iter().any(|n| n == name)
    }

    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    /// Appends `quantity` lines for `name`. Quantities outside
    /// `1..=MAX_QUANTITY` are silently clamped into that range, so a request
    /// for 5000 adds 999 lines.
    pub fn add_to_cart(
        &mut self,
        name: &str,
        price: u64,
        quantity: u32,
    ) -> Result<StoreEvent, StorefrontError> {
        if !self.catalog.contains(name) {
            return Err(StorefrontError::UnknownProduct(name.to_owned()));
        }
        let quantity = quantity.clamp(1, MAX_QUANTITY);
        self.cart.extend((0..quantity).map(|_| CartLine {
            name: name.to_owned(),
            price,
        }));
        self.cart_changed();
        Ok(StoreEvent::CartAdded {
            name: name.to_owned(),
            quantity,
        })
    }

    /// Removes a single unit: the first line matching `name`.
    pub fn remove_from_cart(&mut self, name: &str) -> Option<StoreEvent> {
        let index = self.cart.iter().position(|line| line.name == name)?;
        self.cart.remove(index);
        self.cart_changed();
        Some(StoreEvent::CartRemoved {
            name: name.to_owned(),
        })
    }

    pub fn toggle_wishlist(&mut self, name: &str) -> Result<StoreEvent, StorefrontError> {
        if !self.catalog.contains(name) {
            return Err(StorefrontError::UnknownProduct(name.to_owned()));
        }
        let added = if let Some(index) = self.wishlist.iter().position(|n| n == name) {
            self.wishlist.remove(index);
            false
        } else {
            self.wishlist.push(name.to_owned());
            true
        };
        self.persistence.save_wishlist(&self.wishlist);
        Ok(StoreEvent::WishlistToggled {
            name: name.to_owned(),
            added,
        })
    }

    pub fn dark_mode(&self) -> bool {
        self.persistence.load_dark_mode()
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.persistence.save_dark_mode(enabled);
    }

    pub fn open_product(&mut self, name: &str) -> Result<&Product, StorefrontError> {
        let product = self
            .catalog
            .get(name)
            .ok_or_else(|| StorefrontError::UnknownProduct(name.to_owned()))?;
        self.modals.show_product(name);
        Ok(product)
    }

    pub fn close_product(&mut self) -> bool {
        self.modals.close_product()
    }

    /// Opens checkout; refused while the cart is empty.
    pub fn open_checkout(&mut self) -> Result<(), StorefrontError> {
        if self.cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        self.modals.show_checkout()
    }

    pub fn close_checkout(&mut self) -> bool {
        self.modals.close_checkout()
    }

    /// Marks the open checkout as processing. A second submit while the
    /// first is pending is rejected.
    pub fn submit_checkout(&mut self) -> Result<(), StorefrontError> {
        self.modals.begin_processing()
    }

    /// Finishes a processing checkout: empties the cart, persists, closes.
    pub fn complete_checkout(&mut self) -> Result<StoreEvent, StorefrontError> {
        self.modals.finish_processing()?;
        self.cart.clear();
        self.cart_changed();
        Ok(StoreEvent::CheckoutCompleted)
    }

    pub fn dismiss_modal(&mut self) -> Option<ModalKind> {
        self.modals.dismiss_top()
    }

    fn cart_changed(&mut self) {
        self.recompute_total();
        self.persistence.save_cart(&CartBundle {
            cart: self.cart.clone(),
            total: self.total,
        });
        debug!(lines = self.cart.len(), total = self.total, "cart updated");
    }

    fn recompute_total(&mut self) {
        self.total = self
            .cart
            .iter()
            .fold(0u64, |sum, line| sum.saturating_add(line.price));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::CheckoutPhase;
    use glow_storage::InMemoryStore;
    use proptest::prelude::*;

    fn storefront(store: &InMemoryStore) -> Storefront<&InMemoryStore> {
        Storefront::new(
            Catalog::seed(),
            Persistence::new(store, StorageKeys::default()),
        )
    }

    #[test]
    fn add_two_products_totals_lines() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);

        shop.add_to_cart("CeraVe Cleanser", 10000, 2).expect("add");
        shop.add_to_cart("Anua Serum", 26000, 1).expect("add");

        assert_eq!(shop.total(), 46000);
        assert_eq!(shop.cart().len(), 3);
        assert_eq!(
            shop.groups(),
            vec![
                CartGroup {
                    name: "CeraVe Cleanser".to_owned(),
                    unit_price: 10000,
                    count: 2,
                    subtotal: 20000,
                },
                CartGroup {
                    name: "Anua Serum".to_owned(),
                    unit_price: 26000,
                    count: 1,
                    subtotal: 26000,
                },
            ]
        );
    }

    #[test]
    fn zero_quantity_adds_one_unit() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);
        let event = shop.add_to_cart("Anua Serum", 26000, 0).expect("add");
        assert_eq!(
            event,
            StoreEvent::CartAdded {
                name: "Anua Serum".to_owned(),
                quantity: 1
            }
        );
        assert_eq!(shop.cart().len(), 1);
        assert_eq!(event.toast(), "✓ Anua Serum added to cart");
    }

    #[test]
    fn unknown_product_is_rejected() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);
        assert_eq!(
            shop.add_to_cart("Sunscreen", 5000, 1),
            Err(StorefrontError::UnknownProduct("Sunscreen".to_owned()))
        );
        assert!(shop.cart().is_empty());
        assert!(store.raw("glow_cart").is_none());
    }

    #[test]
    fn remove_takes_one_unit_at_a_time() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);
        shop.add_to_cart("CeraVe Cleanser", 10000, 3).expect("add");

        let event = shop.remove_from_cart("CeraVe Cleanser").expect("removed");
        assert_eq!(event.toast(), "Removed from cart");
        assert_eq!(shop.cart().len(), 2);
        assert_eq!(shop.total(), 20000);

        assert!(shop.remove_from_cart("Anua Serum").is_none());
        assert_eq!(shop.cart().len(), 2);
    }

    #[test]
    fn wishlist_double_toggle_restores_membership() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);

        let first = shop.toggle_wishlist("Anua Serum").expect("toggle");
        assert_eq!(first.toast(), "Added to wishlist");
        assert!(shop.is_wishlisted("Anua Serum"));

        let second = shop.toggle_wishlist("Anua Serum").expect("toggle");
        assert_eq!(second.toast(), "Removed from wishlist");
        assert!(!shop.is_wishlisted("Anua Serum"));
        assert_eq!(store.raw("glow_wishlist").as_deref(), Some("[]"));
        assert!(!second.touches_cart());
    }

    #[test]
    fn empty_cart_never_opens_checkout() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);

        assert_eq!(shop.open_checkout(), Err(StorefrontError::EmptyCart));
        assert_eq!(shop.modals().checkout(), CheckoutPhase::Closed);
        assert_eq!(StorefrontError::EmptyCart.to_string(), "Your cart is empty");
    }

    #[test]
    fn checkout_completion_clears_and_persists() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);
        shop.add_to_cart("Medicude Moisturerizer", 40800, 1).expect("add");

        shop.open_checkout().expect("open");
        shop.submit_checkout().expect("submit");
        assert_eq!(shop.submit_checkout(), Err(StorefrontError::CheckoutInProgress));
        assert!(!shop.close_checkout());

        let event = shop.complete_checkout().expect("complete");
        assert_eq!(event, StoreEvent::CheckoutCompleted);
        assert!(shop.cart().is_empty());
        assert_eq!(shop.total(), 0);
        assert_eq!(shop.modals().checkout(), CheckoutPhase::Closed);
        assert_eq!(
            store.raw("glow_cart").as_deref(),
            Some(r#"{"cart":[],"total":0}"#)
        );

        // A stale timer firing again must not do anything.
        assert_eq!(shop.complete_checkout(), Err(StorefrontError::CheckoutNotOpen));
    }

    #[test]
    fn reload_reproduces_state() {
        let store = InMemoryStore::default();
        {
            let mut shop = storefront(&store);
            shop.add_to_cart("CeraVe Cleanser", 10000, 2).expect("add");
            shop.add_to_cart("The ordinary Toner", 27000, 1).expect("add");
            shop.remove_from_cart("CeraVe Cleanser");
            shop.toggle_wishlist("Anua Serum").expect("toggle");
            shop.toggle_wishlist("CeraVe Cleanser").expect("toggle");
            shop.set_dark_mode(true);
        }

        let mut reloaded = storefront(&store);
        assert!(reloaded.cart().is_empty());
        reloaded.hydrate();

        assert_eq!(
            reloaded.cart(),
            &[
                CartLine {
                    name: "CeraVe Cleanser".to_owned(),
                    price: 10000
                },
                CartLine {
                    name: "The ordinary Toner".to_owned(),
                    price: 27000
                },
            ]
        );
        assert_eq!(reloaded.total(), 37000);
        assert_eq!(reloaded.wishlist(), &["Anua Serum", "CeraVe Cleanser"]);
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn hydrate_repairs_tampered_storage() {
        let store = InMemoryStore::default();
        store
            .set_item(
                "glow_cart",
                r#"{"cart":[{"name":"Anua Serum","price":26000},{"name":"Ghost","price":1}],"total":999}"#,
            )
            .expect("seed");
        store
            .set_item("glow_wishlist", r#"["Anua Serum","Anua Serum","Ghost"]"#)
            .expect("seed");

        let mut shop = storefront(&store);
        shop.hydrate();

        assert_eq!(shop.cart().len(), 1);
        assert_eq!(shop.total(), 26000);
        assert_eq!(shop.wishlist(), &["Anua Serum"]);
    }

    #[test]
    fn hydrate_reprices_lines_and_never_overflows() {
        let store = InMemoryStore::default();
        store
            .set_item(
                "glow_cart",
                r#"{"cart":[{"name":"Anua Serum","price":18446744073709551615},{"name":"Anua Serum","price":1}],"total":0}"#,
            )
            .expect("seed");

        let mut shop = storefront(&store);
        shop.hydrate();

        assert_eq!(shop.cart().len(), 2);
        assert!(shop.cart().iter().all(|line| line.price == 26000));
        assert_eq!(shop.total(), 52000);
        assert_eq!(shop.groups()[0].subtotal, 52000);
    }

    #[test]
    fn huge_prices_saturate_instead_of_wrapping() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);
        shop.add_to_cart("Anua Serum", u64::MAX, 2).expect("add");

        assert_eq!(shop.total(), u64::MAX);
        assert_eq!(shop.groups()[0].subtotal, u64::MAX);
    }

    #[test]
    fn oversized_quantity_is_capped() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);
        let event = shop.add_to_cart("CeraVe Cleanser", 10000, 5000).expect("add");

        assert_eq!(
            event,
            StoreEvent::CartAdded {
                name: "CeraVe Cleanser".to_owned(),
                quantity: MAX_QUANTITY
            }
        );
        assert_eq!(shop.cart().len(), MAX_QUANTITY as usize);
    }

    #[test]
    fn product_modal_and_escape() {
        let store = InMemoryStore::default();
        let mut shop = storefront(&store);

        assert!(shop.open_product("Nope").is_err());
        let product = shop.open_product("Anua Serum").expect("product");
        assert_eq!(product.benefits.len(), 4);
        assert_eq!(shop.modals().product(), Some("Anua Serum"));

        assert_eq!(shop.dismiss_modal(), Some(ModalKind::Product));
        assert!(!shop.modals().any_open());
    }

    #[test]
    fn quantity_parsing_clamps_to_one() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 4"), 4);
        assert_eq!(parse_quantity("2.7"), 2);
        assert_eq!(parse_quantity("5abc"), 5);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("99999999999"), MAX_QUANTITY);
        assert_eq!(parse_quantity("5000"), MAX_QUANTITY);
    }

    #[test]
    fn stepper_never_goes_below_one() {
        assert_eq!(step_quantity("1", Step::Minus), 1);
        assert_eq!(step_quantity("3", Step::Minus), 2);
        assert_eq!(step_quantity("junk", Step::Plus), 2);
        assert_eq!(step_quantity("1", Step::Plus), 2);
        assert_eq!(step_quantity("999", Step::Plus), MAX_QUANTITY);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u32),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4, 0u32..5).prop_map(|(p, q)| Op::Add(p, q)),
            (0usize..4).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn total_always_matches_line_sum(ops in proptest::collection::vec(op(), 0..40)) {
            let store = InMemoryStore::default();
            let mut shop = storefront(&store);
            let products: Vec<(String, u64)> = shop
                .catalog()
                .products()
                .iter()
                .map(|p| (p.name.clone(), p.price))
                .collect();

            for op in ops {
                match op {
                    Op::Add(index, qty) => {
                        let (name, price) = &products[index];
                        shop.add_to_cart(name, *price, qty).expect("known product");
                    }
                    Op::Remove(index) => {
                        shop.remove_from_cart(&products[index].0);
                    }
                }
                let sum: u64 = shop.cart().iter().map(|l| l.price).sum();
                prop_assert_eq!(shop.total(), sum);
                let groups_total: u64 = shop.groups().iter().map(|g| g.subtotal).sum();
                prop_assert_eq!(groups_total, sum);
            }
        }
    }
}
