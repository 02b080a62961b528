//! Site header - brand, navigation, theme toggle, mobile menu.

use crate::html::escape;
use crate::route::Route;
use crate::state::{HeaderState, Theme};
use crate::BRAND_NAME;

/// Desktop navigation entries.
const NAV_ITEMS: [(&str, Route); 2] = [("Products", Route::Catalog), ("Contact", Route::Contact)];

/// Mobile menu entries.
const MOBILE_NAV_ITEMS: [(&str, &str); 2] = [("Products", "/"), ("Collections", "/#collection")];

/// Render the site header.
pub fn render_header(header: &HeaderState, theme: Theme, active: &Route) -> String {
    let nav_html: String = NAV_ITEMS
        .iter()
        .map(|(label, route)| {
            let current = if route == active {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" class="nav-link"{}>{}</a>"#,
                route.path(),
                current,
                label
            )
        })
        .collect();

    format!(
        r#"<header class="site-header" data-section="header">
    <div class="header-inner">
        <a href="/" class="brand"><h1 class="brand-title">{brand}</h1></a>
        <nav class="header-nav">{nav}</nav>
        <div class="header-actions">
            {toggle}
            <button class="menu-toggle" data-action="toggle-menu" aria-expanded="{expanded}" aria-label="Menu">{menu_icon}</button>
        </div>
    </div>
    {mobile_menu}
</header>"#,
        brand = BRAND_NAME,
        nav = nav_html,
        toggle = render_theme_toggle(theme),
        expanded = header.menu_open,
        menu_icon = if header.menu_open { "&#x2715;" } else { "&#x2630;" },
        mobile_menu = render_mobile_menu(header)
    )
}

/// Theme toggle button. Shows the sun in light mode and the moon in dark mode.
pub fn render_theme_toggle(theme: Theme) -> String {
    let (icon_class, glyph) = match theme {
        Theme::Light => ("icon-sun", "&#x2600;"),
        Theme::Dark => ("icon-moon", "&#x263E;"),
    };

    format!(
        r#"<button class="theme-toggle" data-action="toggle-theme" data-theme="{}">
                <span class="icon {}" aria-hidden="true">{}</span>
                <span class="sr-only">Toggle theme</span>
            </button>"#,
        theme.as_str(),
        icon_class,
        glyph
    )
}

fn render_mobile_menu(header: &HeaderState) -> String {
    if !header.menu_open {
        return String::new();
    }

    let items: String = MOBILE_NAV_ITEMS
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<a href="{}" class="mobile-nav-link" data-action="close-menu">{}</a>"#,
                href, label
            )
        })
        .collect();

    format!(
        r#"<div class="mobile-menu">
        <input type="search" name="q" class="mobile-search" placeholder="Search fragrances..." value="{}" aria-label="Search">
        <nav class="mobile-nav">{}</nav>
    </div>"#,
        escape(&header.search_query),
        items
    )
}
