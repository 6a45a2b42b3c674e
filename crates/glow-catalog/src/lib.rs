use glow_types::{PriceRange, Product};
use tracing::debug;

/// Search input plus optional price predicate, as read from the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    term: String,
    price: Option<PriceRange>,
}

impl ProductFilter {
    pub fn new(term: &str, price: Option<PriceRange>) -> Self {
        Self {
            term: term.trim().to_lowercase(),
            price,
        }
    }

    /// Builds a filter from the raw search box and price select values.
    pub fn from_inputs(term: &str, price_range: &str) -> Self {
        Self::new(term, PriceRange::parse(price_range))
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.matches_term(&self.term)
            && self.price.is_none_or(|range| range.contains(product.price))
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The four products the Glow landing page ships with.
    pub fn seed() -> Self {
        Self::new(vec![
            product(
                "CeraVe Cleanser",
                10000,
                Some(12500),
                "images/ceravecleanser.webp",
                "Gentle cleanser that brightens and hydrates dull skin.",
                &[
                    "Removes impurities",
                    "Hydrates skin",
                    "Suitable for all skin types",
                    "Non-foaming formula",
                ],
                true,
                Some("20% OFF"),
            ),
            product(
                "The ordinary Toner",
                27000,
                None,
                "images/theordinary.webp",
                "Deep nourishment for everyday glow with essential ingredients.",
                &[
                    "Balances pH",
                    "Deep hydration",
                    "Prepares skin for serums",
                    "Lightweight formula",
                ],
                true,
                None,
            ),
            product(
                "Anua Serum",
                26000,
                None,
                "images/anuaserum.png",
                "Velvety smooth hydration for all skin types.",
                &[
                    "Intense hydration",
                    "Reduces fine lines",
                    "Brightens complexion",
                    "Fast absorption",
                ],
                false,
                None,
            ),
            product(
                "Medicude Moisturerizer",
                40800,
                Some(48000),
                "images/medicude.webp",
                "Rich moisturizer that deeply nourishes and protects skin.",
                &[
                    "Long-lasting moisture",
                    "Strengthens barrier",
                    "Anti-aging properties",
                    "Luxury feel",
                ],
                true,
                Some("15% OFF"),
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Full re-scan of the catalog; there is no index to keep in sync.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        let matched: Vec<&Product> = self.products.iter().filter(|p| filter.matches(p)).collect();
        debug!(matched = matched.len(), "catalog filtered");
        matched
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    price: u64,
    original_price: Option<u64>,
    image: &str,
    description: &str,
    benefits: &[&str],
    in_stock: bool,
    sale: Option<&str>,
) -> Product {
    Product {
        name: name.to_owned(),
        price,
        original_price,
        image: image.to_owned(),
        description: description.to_owned(),
        benefits: benefits.iter().map(|b| (*b).to_owned()).collect(),
        in_stock,
        sale: sale.map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn seed_has_unique_names() {
        let catalog = Catalog::seed();
        let mut seen: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), catalog.products().len());
        assert_eq!(catalog.products().len(), 4);
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let catalog = Catalog::seed();
        let all = catalog.filter(&ProductFilter::default());
        assert_eq!(
            names(&all),
            vec![
                "CeraVe Cleanser",
                "The ordinary Toner",
                "Anua Serum",
                "Medicude Moisturerizer"
            ]
        );
    }

    #[test]
    fn term_matches_name_or_description_case_insensitively() {
        let catalog = Catalog::seed();

        let by_name = catalog.filter(&ProductFilter::from_inputs("  SERUM ", ""));
        assert_eq!(names(&by_name), vec!["Anua Serum"]);

        // "velvety" only appears in the serum description, "glow" only in the toner's
        let by_description = catalog.filter(&ProductFilter::from_inputs("velvety", ""));
        assert_eq!(names(&by_description), vec!["Anua Serum"]);
        let toner = catalog.filter(&ProductFilter::from_inputs("everyday GLOW", ""));
        assert_eq!(names(&toner), vec!["The ordinary Toner"]);
    }

    #[test]
    fn unmatched_term_yields_empty_set() {
        let catalog = Catalog::seed();
        assert!(catalog.filter(&ProductFilter::from_inputs("sunscreen", "")).is_empty());
    }

    #[test]
    fn price_range_is_inclusive() {
        let catalog = Catalog::seed();
        let hits = catalog.filter(&ProductFilter::from_inputs("", "10000-26000"));
        assert_eq!(names(&hits), vec!["CeraVe Cleanser", "Anua Serum"]);
        for p in &hits {
            assert!((10000..=26000).contains(&p.price));
        }

        let upper = catalog.filter(&ProductFilter::from_inputs("", "27000-"));
        assert_eq!(names(&upper), vec!["The ordinary Toner", "Medicude Moisturerizer"]);
    }

    #[test]
    fn term_and_range_intersect() {
        let catalog = Catalog::seed();
        let hits = catalog.filter(&ProductFilter::from_inputs("skin", "0-20000"));
        assert_eq!(names(&hits), vec!["CeraVe Cleanser"]);
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get("Anua Serum").map(|p| p.in_stock), Some(false));
        assert!(!catalog.contains("anua serum"));
    }
}
