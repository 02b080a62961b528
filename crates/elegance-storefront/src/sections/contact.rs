//! Contact page sections - hero, channel cards, store details.

use crate::data::{ContactChannel, StoreInfo};
use crate::html::escape;

/// Render the contact hero.
pub fn render_contact_hero() -> String {
    r#"<section class="contact-hero" data-section="contact-hero">
    <h1 class="contact-title">Get in Touch</h1>
    <p class="contact-intro">We'd love to hear from you. Reach out through any of these channels for personalized fragrance consultations and support.</p>
</section>"#
        .to_string()
}

/// Render one card per contact channel. Links open in a new tab.
pub fn render_contact_channels(channels: &[ContactChannel]) -> String {
    let cards: String = channels
        .iter()
        .map(|channel| {
            format!(
                r#"<div class="channel-card {kind}">
            <h3 class="channel-title">{title}</h3>
            <p class="channel-description">{description}</p>
            <p class="channel-value">{value}</p>
            <a href="{link}" class="channel-link" target="_blank" rel="noopener noreferrer">Connect Now</a>
        </div>"#,
                kind = channel.kind.css_class(),
                title = escape(&channel.title),
                description = escape(&channel.description),
                value = escape(&channel.value),
                link = escape(&channel.link),
            )
        })
        .collect();

    format!(
        r#"<section class="contact-channels" data-section="contact-channels">
    <div class="channel-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render the boutique address and opening hours.
pub fn render_store_info(info: &StoreInfo) -> String {
    let address = info
        .address_lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>");

    let hours: String = info
        .hours
        .iter()
        .map(|h| {
            format!(
                r#"<p><span class="hours-days">{}:</span> {}</p>"#,
                escape(&h.days),
                escape(&h.hours)
            )
        })
        .collect();

    format!(
        r#"<section class="store-info" data-section="store-info">
    <div class="store-visit">
        <h3>Visit Our Store</h3>
        <p>Experience our luxury fragrances in person at our flagship boutique.</p>
        <address>{}</address>
    </div>
    <div class="store-hours">
        <h3>Business Hours</h3>
        <p>We're here to help you find your perfect scent.</p>
        {}
    </div>
</section>"#,
        address, hours
    )
}
