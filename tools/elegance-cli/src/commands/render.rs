//! Page rendering command.

use anyhow::{bail, Context as _, Result};
use elegance_catalog::catalog::Catalog;
use elegance_storefront::{InMemoryThemePreference, Route, Storefront, Theme};

use super::RenderArgs;
use crate::config::StorefrontConfig;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let theme = resolve_theme(args.theme.as_deref(), &ctx.config)?;
    let storefront = build_storefront(&args.path, theme, &ctx.config);
    let html = storefront.render();
    tracing::debug!(path = %args.path, %theme, bytes = html.len(), "rendered page");

    if let Route::NotFound(path) = storefront.route() {
        ctx.output.warn(&format!("No page at {}; rendering not found", path));
    }

    let Some(out) = args.out else {
        print!("{}", html);
        return Ok(());
    };

    let out = ctx.resolve_path(&out);
    std::fs::write(&out, &html)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": args.path,
            "route": storefront.route().path(),
            "theme": theme,
            "out": out.display().to_string(),
            "bytes": html.len(),
        }));
    } else {
        ctx.output
            .success(&format!("Rendered {} to {}", args.path, out.display()));
    }

    Ok(())
}

fn resolve_theme(flag: Option<&str>, config: &StorefrontConfig) -> Result<Theme> {
    match flag {
        None => Ok(config.theme.default),
        Some(raw) => match Theme::from_str(raw) {
            Some(theme) => Ok(theme),
            None => bail!("Unknown theme '{}'. Expected 'light' or 'dark'.", raw),
        },
    }
}

fn build_storefront(
    path: &str,
    theme: Theme,
    config: &StorefrontConfig,
) -> Storefront<InMemoryThemePreference> {
    let mut storefront =
        Storefront::with_theme(Catalog::seed(), InMemoryThemePreference::new(theme))
            .with_defaults(config.view_state());
    storefront.navigate(path);
    storefront
}

#[cfg(test)]
mod tests {
    use super::*;
    use elegance_catalog::listing::SortKey;

    #[test]
    fn test_resolve_theme() {
        let mut config = StorefrontConfig::default();
        assert_eq!(resolve_theme(None, &config).unwrap(), Theme::Light);
        config.theme.default = Theme::Dark;
        assert_eq!(resolve_theme(None, &config).unwrap(), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), &config).unwrap(), Theme::Light);
        assert!(resolve_theme(Some("sepia"), &config).is_err());
    }

    #[test]
    fn test_query_overrides_configured_defaults() {
        let mut config = StorefrontConfig::default();
        config.catalog.default_sort = SortKey::Name;

        let storefront = build_storefront("/", Theme::Light, &config);
        assert_eq!(storefront.view().sort(), SortKey::Name);

        let storefront = build_storefront("/?sort=price-low", Theme::Light, &config);
        assert_eq!(storefront.view().sort(), SortKey::PriceLow);
    }

    #[test]
    fn test_dark_contact_page() {
        let storefront = build_storefront("/contact", Theme::Dark, &StorefrontConfig::default());
        assert_eq!(storefront.route(), &Route::Contact);
        let html = storefront.render();
        assert!(html.contains(r#"class="dark""#));
        assert!(html.contains("Connect Now"));
    }
}
