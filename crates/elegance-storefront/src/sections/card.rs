//! Product card.

use elegance_catalog::catalog::Product;

use crate::html::escape;
use crate::state::CardState;

const STAR_COUNT: u8 = 5;

/// Render one product card. `index` is the card's position in the grid.
pub fn render_product_card(product: &Product, card: CardState, index: usize) -> String {
    let badge = match product.discount_percent() {
        Some(percent) => format!(r#"<div class="discount-badge">-{}%</div>"#, percent),
        None => String::new(),
    };

    let original_price = match (product.is_discounted(), product.original_price) {
        (true, Some(original)) => format!(
            r#"<span class="price-original">{}</span>"#,
            original.display()
        ),
        _ => String::new(),
    };

    let features: String = product
        .features
        .iter()
        .map(|f| format!(r#"<li class="feature">{}</li>"#, escape(f)))
        .collect();

    format!(
        r#"<article class="product-card{hovered_class}" data-product-id="{id}" data-index="{index}">
    <div class="product-media">
        <img src="{image}" alt="{name}" loading="lazy">
        {overlay}
        {badge}
    </div>
    <div class="product-info">
        <div class="product-rating">
            {stars}
            <span class="review-count">({reviews} reviews)</span>
        </div>
        <h3 class="product-title">{name}</h3>
        <p class="product-scent">{scent}</p>
        <div class="product-details">
            <p class="product-description">{description}</p>
            <ul class="product-features">{features}</ul>
        </div>
        <div class="product-price">
            <span class="price-current">{price}</span>
            {original_price}
        </div>
        <button class="add-to-cart" type="button" data-product-id="{id}">Add to Cart - {price}</button>
    </div>
</article>"#,
        hovered_class = if card.hovered { " is-hovered" } else { "" },
        id = escape(product.id.as_str()),
        index = index,
        image = escape(&product.image),
        name = escape(&product.name),
        overlay = render_overlay(product, card),
        badge = badge,
        stars = render_stars(product.full_stars()),
        reviews = product.reviews,
        scent = escape(&product.scent),
        description = escape(&product.description),
        features = features,
        price = product.price.display(),
        original_price = original_price,
    )
}

/// Quick actions shown over the image while the card is hovered.
fn render_overlay(product: &Product, card: CardState) -> String {
    if !card.hovered {
        return String::new();
    }

    let heart_class = if card.favorite {
        "heart heart--filled"
    } else {
        "heart"
    };

    format!(
        r#"<div class="card-overlay">
            <button class="overlay-cart" type="button" data-product-id="{id}">Add to Cart</button>
            <button class="overlay-favorite" type="button" data-action="toggle-favorite" data-product-id="{id}" aria-pressed="{favorite}" aria-label="Favorite">
                <span class="{heart_class}" aria-hidden="true">&#x2665;</span>
            </button>
        </div>"#,
        id = escape(product.id.as_str()),
        favorite = card.favorite,
        heart_class = heart_class
    )
}

/// Filled stars for the whole part of the rating, the rest empty.
pub fn render_stars(full: u8) -> String {
    let full = full.min(STAR_COUNT);
    let mut html = String::from(r#"<span class="stars">"#);

    for i in 0..STAR_COUNT {
        if i < full {
            html.push_str(r#"<span class="star star--filled">&#x2605;</span>"#);
        } else {
            html.push_str(r#"<span class="star">&#x2606;</span>"#);
        }
    }

    html.push_str("</span>");
    html
}
