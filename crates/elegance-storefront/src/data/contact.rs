//! Contact page content.

use serde::{Deserialize, Serialize};

/// Kind of outbound contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Instagram,
    WhatsApp,
    Email,
}

impl ChannelKind {
    /// CSS modifier for the channel's icon badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ChannelKind::Instagram => "channel--instagram",
            ChannelKind::WhatsApp => "channel--whatsapp",
            ChannelKind::Email => "channel--email",
        }
    }
}

/// One way of reaching the brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub title: String,
    pub description: String,
    /// Handle, number or address shown to the visitor.
    pub value: String,
    /// Outbound link; passed through untouched.
    pub link: String,
}

impl ContactChannel {
    pub fn new(
        kind: ChannelKind,
        title: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            value: value.into(),
            link: link.into(),
        }
    }

    /// The brand's published channels.
    pub fn defaults() -> Vec<ContactChannel> {
        vec![
            ContactChannel::new(
                ChannelKind::Instagram,
                "Instagram",
                "Follow us for latest updates",
                "@elegance.perfumes",
                "https://instagram.com/elegance.perfumes",
            ),
            ContactChannel::new(
                ChannelKind::WhatsApp,
                "WhatsApp",
                "Direct messaging for instant support",
                "+91 98765 43210",
                "https://wa.me/919876543210",
            ),
            ContactChannel::new(
                ChannelKind::Email,
                "Email",
                "Send us your inquiries",
                "hello@eleganceperfumes.com",
                "mailto:hello@eleganceperfumes.com",
            ),
        ]
    }
}

/// Opening hours for a range of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

/// Flagship boutique details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub address_lines: Vec<String>,
    pub hours: Vec<OpeningHours>,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            address_lines: vec![
                "123 Fragrance Lane".to_string(),
                "Mumbai, Maharashtra 400001".to_string(),
                "India".to_string(),
            ],
            hours: vec![
                OpeningHours {
                    days: "Mon - Sat".to_string(),
                    hours: "10:00 AM - 8:00 PM".to_string(),
                },
                OpeningHours {
                    days: "Sunday".to_string(),
                    hours: "11:00 AM - 6:00 PM".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channels() {
        let channels = ContactChannel::defaults();
        let kinds: Vec<ChannelKind> = channels.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ChannelKind::Instagram, ChannelKind::WhatsApp, ChannelKind::Email]
        );
        assert!(channels[2].link.starts_with("mailto:"));
        assert!(channels[1].link.starts_with("https://wa.me/"));
    }

    #[test]
    fn test_store_info() {
        let info = StoreInfo::default();
        assert_eq!(info.address_lines.len(), 3);
        assert_eq!(info.hours[1].days, "Sunday");
    }
}
