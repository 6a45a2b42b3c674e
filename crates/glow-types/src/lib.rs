use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub original_price: Option<u64>,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub in_stock: bool,
    #[serde(default)]
    pub sale: Option<String>,
}

impl Product {
    /// Original price, only when it is actually above the selling price.
    pub fn discounted_from(&self) -> Option<u64> {
        self.original_price.filter(|original| *original > self.price)
    }

    pub fn matches_term(&self, lowered_term: &str) -> bool {
        self.name.to_lowercase().contains(lowered_term)
            || self.description.to_lowercase().contains(lowered_term)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub price: u64,
}

/// Persisted cart shape: `{"cart": [...], "total": N}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartBundle {
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub total: u64,
}

/// Inclusive price predicate parsed from a `"min-max"` filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    /// Parses `"min-max"`. A missing or non-numeric bound falls back to 0 for
    /// `min` and to unbounded for `max`; a zero `max` is also unbounded.
    /// Returns `None` for an empty value, meaning "no price filter".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let mut parts = raw.split('-');
        let min = parts.next().and_then(parse_bound).unwrap_or(0);
        let max = parts.next().and_then(parse_bound).filter(|max| *max > 0);

        Some(Self { min, max })
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Formats an amount the way the storefront displays prices: currency symbol
/// followed by the integer with comma thousands separators.
pub fn format_price(symbol: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{symbol}{grouped}")
}
