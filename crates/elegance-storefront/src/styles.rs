//! Inline stylesheet for the storefront pages.

pub(crate) const STOREFRONT_STYLES: &str = r##"
:root {
    --bg: #fdfaf6;
    --card-bg: #ffffff;
    --text: #2b2118;
    --text-muted: #7a6a5c;
    --accent: #b8860b;
    --border: #eadfd3;
    --badge: #c9a227;
}

html.dark {
    --bg: #15110d;
    --card-bg: #211b15;
    --text: #f3ebe1;
    --text-muted: #a89886;
    --accent: #e0b84f;
    --border: #3a3027;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: Georgia, 'Times New Roman', serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
}

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
    padding: 0 2rem;
}

.brand { text-decoration: none; }
.brand-title { font-size: 1.5rem; color: var(--accent); }
.header-nav { display: flex; gap: 2rem; }
.nav-link { color: var(--text); text-decoration: none; opacity: 0.8; }
.nav-link[aria-current="page"] { opacity: 1; font-weight: 600; }
.theme-toggle, .menu-toggle { background: none; border: none; color: var(--text); cursor: pointer; font-size: 1.25rem; }
.menu-toggle { display: none; }
.mobile-menu { padding: 1rem 2rem; border-top: 1px solid var(--border); }
.mobile-search { width: 100%; padding: 0.5rem; margin-bottom: 1rem; }
.mobile-nav { display: flex; flex-direction: column; gap: 0.5rem; }

main { max-width: 1200px; margin: 0 auto; padding: 2rem; }

.collection-header { text-align: center; margin-bottom: 3rem; }
.collection-title { font-size: 2.5rem; color: var(--accent); }
.collection-tagline { color: var(--text-muted); }

.listing-controls {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    margin-bottom: 2rem;
}

.listing-selects { display: flex; gap: 1rem; }
.listing-selects select { padding: 0.5rem; border: 1px solid var(--border); background: var(--card-bg); color: var(--text); }
.view-control { display: flex; gap: 0.5rem; }
.view-btn { padding: 0.5rem 0.75rem; border: 1px solid var(--border); color: var(--text); text-decoration: none; }
.view-btn.active { background: var(--accent); color: var(--bg); }

.product-grid { display: grid; gap: 1.5rem; }
.product-grid--grid { grid-template-columns: repeat(3, 1fr); }
.product-grid--list { grid-template-columns: 1fr; max-width: 56rem; margin: 0 auto; }

.product-card {
    position: relative;
    display: flex;
    flex-direction: column;
    padding: 1.5rem;
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 12px;
}

.product-card.is-hovered { box-shadow: 0 8px 24px rgba(184, 134, 11, 0.2); }
.product-media { position: relative; overflow: hidden; border-radius: 8px; margin-bottom: 1rem; }
.product-media img { width: 100%; height: 16rem; object-fit: cover; }
.card-overlay { position: absolute; inset: 0; display: flex; align-items: flex-end; gap: 0.5rem; padding: 1rem; background: linear-gradient(to top, rgba(0,0,0,0.5), transparent); }
.heart--filled { color: #ef4444; }
.discount-badge { position: absolute; top: 1rem; left: 1rem; padding: 0.25rem 0.75rem; border-radius: 999px; background: var(--badge); color: #fff; font-weight: 600; }
.star { color: var(--text-muted); }
.star--filled { color: var(--accent); }
.review-count { color: var(--text-muted); font-size: 0.875rem; margin-left: 0.5rem; }
.product-scent, .product-features { color: var(--text-muted); font-size: 0.875rem; }
.product-features { list-style: none; margin: 0.5rem 0 1rem; }
.price-current { font-size: 1.5rem; font-weight: 700; color: var(--accent); }
.price-original { margin-left: 0.5rem; color: var(--text-muted); text-decoration: line-through; }
.add-to-cart, .load-more-btn, .channel-link { display: block; width: 100%; margin-top: 1rem; padding: 0.75rem; border: none; border-radius: 8px; background: var(--accent); color: var(--bg); font-weight: 600; text-align: center; text-decoration: none; cursor: pointer; }
.load-more { max-width: 20rem; margin: 3rem auto 0; }
.empty-state { text-align: center; padding: 4rem 0; color: var(--text-muted); }

.contact-hero { text-align: center; padding: 4rem 0 2rem; }
.contact-title { font-size: 3rem; color: var(--accent); }
.channel-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.channel-card { padding: 2rem; text-align: center; background: var(--card-bg); border: 1px solid var(--border); border-radius: 12px; }
.channel-value { font-weight: 600; color: var(--accent); }
.store-info { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 3rem; padding: 2rem; background: var(--card-bg); border-radius: 12px; }
.not-found { text-align: center; padding: 4rem 0; }

@media (max-width: 768px) {
    .header-nav { display: none; }
    .menu-toggle { display: inline-block; }
    .product-grid--grid, .channel-grid, .store-info { grid-template-columns: 1fr; }
    .listing-controls { flex-direction: column; }
}
"##;

/// Script wiring the selects to the URL, so every change reloads the
/// listing with the new view state.
pub(crate) const STOREFRONT_SCRIPT: &str = r#"<script>
function applyParam(key, value) {
    const url = new URL(window.location);
    url.searchParams.set(key, value);
    window.location = url;
}
</script>"#;
