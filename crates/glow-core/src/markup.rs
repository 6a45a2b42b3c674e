//! HTML fragments for the product grid and cart views.
//!
//! Class names here are what the stylesheet targets; keep them stable.
//! Every render is a full rebuild from state.

use crate::store::CartGroup;
use glow_types::{Product, format_price};
use std::fmt::Write as _;
use v_htmlescape::escape;

pub const WISHLIST_ON: &str = "♥";
pub const WISHLIST_OFF: &str = "♡";
pub const EMPTY_CART: &str = "<p>Your cart is empty</p>";

pub fn wishlist_glyph(wishlisted: bool) -> &'static str {
    if wishlisted { WISHLIST_ON } else { WISHLIST_OFF }
}

pub fn product_card(product: &Product, wishlisted: bool, symbol: &str) -> String {
    let name = escape(&product.name);
    let sale = product
        .sale
        .as_deref()
        .map(|label| format!(r#"<div class="sale-badge">{}</div>"#, escape(label)))
        .unwrap_or_default();
    let original = product
        .discounted_from()
        .map(|price| format!("<strike>{}</strike> ", format_price(symbol, price)))
        .unwrap_or_default();
    let class = if product.in_stock {
        "product-card"
    } else {
        "product-card out-of-stock"
    };
    let disabled = if product.in_stock { "" } else { " disabled" };

    format!(
        r#"<article class="{class}">
  {sale}
  <button class="wishlist-btn" data-product="{name}" aria-label="Add {name} to wishlist">{glyph}</button>
  <img class="product-image" src="{image}" alt="{name}" loading="lazy">
  <h3>{name}</h3>
  <p class="desc">{description}</p>
  <p class="price">{original}{price}</p>
  <div class="quantity-selector">
    <button class="qty-btn minus">−</button>
    <input class="qty-input" type="number" value="1" min="1">
    <button class="qty-btn plus">+</button>
  </div>
  <div class="actions">
    <button class="add-cart" data-name="{name}" data-price="{raw_price}"{disabled}>Add to Cart</button>
    <button class="view-details" data-name="{name}">View Details</button>
  </div>
</article>"#,
        glyph = wishlist_glyph(wishlisted),
        image = escape(&product.image),
        description = escape(&product.description),
        price = format_price(symbol, product.price),
        raw_price = product.price,
    )
}

pub fn product_grid<F>(products: &[&Product], is_wishlisted: F, symbol: &str) -> String
where
    F: Fn(&str) -> bool,
{
    products
        .iter()
        .map(|p| product_card(p, is_wishlisted(&p.name), symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Primary cart list: one `li` per product with its unit count.
pub fn cart_items(groups: &[CartGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let name = escape(&group.name);
        let _ = write!(
            out,
            r#"<li class="cart-item"><span>{name} × {count}</span><button class="remove-item" data-name="{name}">Remove</button></li>"#,
            count = group.count,
        );
    }
    out
}

pub fn cart_total(total: u64, symbol: &str) -> String {
    format!("Total: {}", format_price(symbol, total))
}

pub fn mini_cart(groups: &[CartGroup], total: u64, symbol: &str) -> String {
    if groups.is_empty() {
        return EMPTY_CART.to_owned();
    }
    let mut out = String::from("<h4>Recent Items</h4>");
    for group in groups {
        let _ = write!(
            out,
            r#"<div class="mini-item"><span>{}</span><span>×{}</span></div>"#,
            escape(&group.name),
            group.count,
        );
    }
    let _ = write!(
        out,
        r#"<div style="margin-top:.6rem"><strong>{}</strong></div>"#,
        cart_total(total, symbol)
    );
    out
}

pub fn checkout_items(groups: &[CartGroup], symbol: &str) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = write!(
            out,
            r#"<div class="checkout-item"><strong>{}</strong><span>{} × {} = {}</span></div>"#,
            escape(&group.name),
            format_price(symbol, group.unit_price),
            group.count,
            format_price(symbol, group.subtotal),
        );
    }
    out
}

pub fn benefit_items(product: &Product) -> String {
    product
        .benefits
        .iter()
        .map(|b| format!("<li>{}</li>", escape(b)))
        .collect()
}
