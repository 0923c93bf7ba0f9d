use crate::catalogue::Product;

pub const DEFAULT_CHAT_BASE: &str = "https://wa.me";
/// Shipped in place of a real number. Deployments override it, see `config`.
pub const PLACEHOLDER_CONTACT: &str = "234XXXXXXXXXX";

pub fn order_message(title: &str, price: &str) -> String {
    format!("Hi, I'm interested in {} - {}", title, price)
}

/// WhatsApp click-to-chat link for a single contact.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLink {
    base_url: String,
    contact: String,
}

impl ChatLink {
    pub fn new(base_url: impl Into<String>, contact: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            contact: contact.into(),
        }
    }

    /// Anything other than plain digits cannot be dialled.
    pub fn is_placeholder(&self) -> bool {
        self.contact.is_empty() || !self.contact.chars().all(|c| c.is_ascii_digit())
    }

    pub fn contact_url(&self) -> String {
        format!("{}/{}", self.base_url, self.contact)
    }

    pub fn with_text(&self, text: &str) -> String {
        format!("{}?text={}", self.contact_url(), urlencoding::encode(text))
    }

    pub fn order_url(&self, product: &Product) -> String {
        self.with_text(&order_message(&product.title, &product.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coat() -> Product {
        Product {
            id: "p-1".to_string(),
            title: "Heritage Coat".to_string(),
            price: "₦85,000".to_string(),
            image_path: "/don-richie/coat-1.jpg".to_string(),
        }
    }

    #[test]
    fn order_link_decodes_to_message() {
        let link = ChatLink::new(DEFAULT_CHAT_BASE, PLACEHOLDER_CONTACT);
        let url = link.order_url(&coat());

        let prefix = "https://wa.me/234XXXXXXXXXX?text=";
        assert!(url.starts_with(prefix));
        let decoded = urlencoding::decode(&url[prefix.len()..]).unwrap();
        assert_eq!(decoded, "Hi, I'm interested in Heritage Coat - ₦85,000");
    }

    #[test]
    fn message_is_percent_encoded() {
        let link = ChatLink::new(DEFAULT_CHAT_BASE, "2348000000000");
        let url = link.with_text("Hi, I want a site");
        assert_eq!(url, "https://wa.me/2348000000000?text=Hi%2C%20I%20want%20a%20site");
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let link = ChatLink::new("https://wa.me/", "2348000000000");
        assert_eq!(link.contact_url(), "https://wa.me/2348000000000");
    }

    #[test]
    fn detects_placeholder_contacts() {
        assert!(ChatLink::new(DEFAULT_CHAT_BASE, PLACEHOLDER_CONTACT).is_placeholder());
        assert!(ChatLink::new(DEFAULT_CHAT_BASE, "").is_placeholder());
        assert!(!ChatLink::new(DEFAULT_CHAT_BASE, "2348000000000").is_placeholder());
    }
}
