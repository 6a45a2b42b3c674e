//! Share links for the product modal.

use urlencoding::{decode, encode};

pub const PRODUCT_QUERY_PARAM: &str = "product";
const MAIL_SUBJECT: &str = "Check this product";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub page: String,
    pub whatsapp: String,
    pub email: String,
}

impl ShareLinks {
    /// `origin` is e.g. `https://glow.example`, `path` the page pathname.
    pub fn for_product(origin: &str, path: &str, name: &str) -> Self {
        let page = format!("{origin}{path}?{PRODUCT_QUERY_PARAM}={}", encode(name));
        let message = format!("{name} {page}");

        Self {
            whatsapp: format!("https://wa.me/?text={}", encode(&message)),
            email: format!(
                "mailto:?subject={}&body={}",
                encode(MAIL_SUBJECT),
                encode(&message)
            ),
            page,
        }
    }
}

/// Extracts the `product` parameter from a location search string
/// (`?product=Anua%20Serum&x=1`). `+` decodes to a space.
pub fn product_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == PRODUCT_QUERY_PARAM)
        .and_then(|(_, value)| decode(&value.replace('+', " ")).ok().map(|v| v.into_owned()))
        .filter(|name| !name.is_empty())
}
