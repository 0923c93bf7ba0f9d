use serde::Deserialize;

use crate::browser;
use crate::catalogue::{self, Product};
use crate::deeplink::{ChatLink, DEFAULT_CHAT_BASE, PLACEHOLDER_CONTACT};

/// Id of the `<script type="application/json">` tag in `index.html` that may
/// override any field below at runtime.
pub const EMBEDDED_CONFIG_ID: &str = "boutique-config";

/// Everything that used to differ between the page drafts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub brand_name: String,
    pub tagline: String,
    pub product_count: usize,
    pub price_offset: u64,
    pub image_template: String,
    pub contact: String,
    pub chat_base_url: String,
    pub contact_email: String,
    pub designer_credit: String,
}

fn contact_from_env() -> String {
    option_env!("BOUTIQUE_WHATSAPP_CONTACT")
        .unwrap_or(PLACEHOLDER_CONTACT)
        .to_string()
}

impl PageConfig {
    /// Four curated pieces.
    pub fn featured() -> Self {
        PageConfig {
            brand_name: "Don Richie Boutique".to_string(),
            tagline: "Curated luxury wear, cut with personality. A shop built for presence, confidence and conversation.".to_string(),
            product_count: 4,
            price_offset: 15,
            image_template: "/don-richie/look-{n}.jpg".to_string(),
            contact: contact_from_env(),
            chat_base_url: DEFAULT_CHAT_BASE.to_string(),
            contact_email: "habeebtijanivictor@gmail.com".to_string(),
            designer_credit: "Victor".to_string(),
        }
    }

    /// Curated pieces followed by generic collection items.
    pub fn full_catalogue() -> Self {
        PageConfig {
            product_count: 20,
            price_offset: 18,
            ..Self::featured()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn chat_link(&self) -> ChatLink {
        ChatLink::new(self.chat_base_url.clone(), self.contact.clone())
    }

    /// Splits the brand name so the last word can be accented.
    pub fn brand_parts(&self) -> (&str, &str) {
        self.brand_name
            .trim()
            .rsplit_once(' ')
            .unwrap_or(("", self.brand_name.trim()))
    }

    pub fn products(&self) -> Vec<Product> {
        catalogue::generate(self.product_count, self.price_offset, &self.image_template)
    }
}

#[cfg(debug_assertions)]
fn build_variant() -> PageConfig {
    PageConfig::full_catalogue()
}

#[cfg(not(debug_assertions))]
fn build_variant() -> PageConfig {
    PageConfig::featured()
}

impl Default for PageConfig {
    fn default() -> Self {
        build_variant()
    }
}

/// Build defaults, overridden by the JSON embedded in the page if present.
pub fn load() -> PageConfig {
    let config = match browser::text_of_element(EMBEDDED_CONFIG_ID) {
        Ok(Some(raw)) if !raw.trim().is_empty() => PageConfig::from_json(&raw).unwrap_or_else(|err| {
            log::error!("Ignoring malformed page config: {}", err);
            PageConfig::default()
        }),
        Ok(_) => PageConfig::default(),
        Err(err) => {
            log::warn!("Page config not readable, using defaults: {}", err);
            PageConfig::default()
        }
    };
    if config.chat_link().is_placeholder() {
        log::warn!(
            "WhatsApp contact `{}` is a placeholder; order links will not reach anyone",
            config.contact
        );
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_in_catalogue_shape() {
        let featured = PageConfig::featured();
        let full = PageConfig::full_catalogue();
        assert_eq!((featured.product_count, featured.price_offset), (4, 15));
        assert_eq!((full.product_count, full.price_offset), (20, 18));
        assert_eq!(featured.contact, full.contact);
        assert_eq!(full.products().len(), 20);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{ "contact": "2348012345678" }"#).unwrap();
        assert_eq!(config.contact, "2348012345678");
        assert_eq!(config.product_count, PageConfig::default().product_count);
        assert_eq!(
            config.chat_link().contact_url(),
            "https://wa.me/2348012345678"
        );
    }

    #[test]
    fn json_can_reshape_catalogue() {
        let config =
            PageConfig::from_json(r#"{ "product_count": 6, "price_offset": 15 }"#).unwrap();
        let products = config.products();
        assert_eq!(products.len(), 6);
        assert_eq!(products[5].price, "₦21,000");
    }

    #[test]
    fn huge_price_offset_saturates() {
        let config = PageConfig::from_json(
            r#"{ "product_count": 5, "price_offset": 18446744073709551000 }"#,
        )
        .unwrap();
        let products = config.products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[4].price, crate::catalogue::format_price(u64::MAX));
    }

    #[test]
    fn brand_name_splits_on_last_word() {
        let mut config = PageConfig::featured();
        assert_eq!(config.brand_parts(), ("Don Richie", "Boutique"));
        config.brand_name = "Richie".to_string();
        assert_eq!(config.brand_parts(), ("", "Richie"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{ contact: ").is_err());
        assert!(PageConfig::from_json(r#"{ "product_count": "many" }"#).is_err());
    }
}
