//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use elegance_catalog::listing::{CategoryFilter, SortKey, ViewMode, ViewState};
use elegance_observability::LoggingConfig;
use elegance_storefront::Theme;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Names searched for when no `--config` is given, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["elegance.toml", ".elegance.toml", "elegance.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Initial listing state.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Theme settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        read_config(path)
    }

    /// Read only the `[logging]` section, leaving the rest unparsed.
    ///
    /// Lets the subscriber be installed before the catalog defaults are
    /// parsed, so their fallback warnings are not lost.
    pub fn load_logging(path: &Path) -> Result<LoggingConfig> {
        read_config::<LoggingSection>(path).map(|section| section.logging)
    }

    /// Listing state the storefront starts in.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            filter: self.catalog.default_category.clone(),
            sort: self.catalog.default_sort,
            view_mode: self.catalog.default_view,
        }
    }
}

#[derive(Deserialize)]
struct LoggingSection {
    #[serde(default)]
    logging: LoggingConfig,
}

fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Initial listing state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Category filter key (`all`, `luxury`, ...).
    #[serde(default)]
    pub default_category: CategoryFilter,

    /// Sort key (`featured`, `price-low`, ...).
    #[serde(default)]
    pub default_sort: SortKey,

    /// Layout (`grid` or `list`).
    #[serde(default)]
    pub default_view: ViewMode,
}

/// Theme settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme used when rendering without `--theme`.
    #[serde(default)]
    pub default: Theme,
}

/// Generate a default elegance.toml config file.
pub fn generate_default_config() -> String {
    r#"# Elegance storefront configuration

[catalog]
# all, luxury, evening, casual, premium
default_category = "all"
# featured, price-low, price-high, rating, name
default_sort = "featured"
# grid, list
default_view = "grid"

[theme]
default = "light"

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = "info"
# human, json
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use elegance_catalog::catalog::Category;
    use elegance_observability::{LogFormat, LogLevel};

    #[test]
    fn test_generated_config_equals_default() {
        let parsed: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, StorefrontConfig::default());
        assert_eq!(parsed.view_state(), ViewState::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let parsed: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let parsed: StorefrontConfig = toml::from_str(
            r#"
[catalog]
default_category = "luxury"
default_sort = "price-high"

[theme]
default = "dark"

[logging]
format = "json"
"#,
        )
        .unwrap();

        let state = parsed.view_state();
        assert_eq!(state.filter, CategoryFilter::Only(Category::Luxury));
        assert_eq!(state.sort, SortKey::PriceHigh);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert_eq!(parsed.theme.default, Theme::Dark);
        assert_eq!(parsed.logging.format, LogFormat::Json);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let parsed: StorefrontConfig =
            toml::from_str("[catalog]\ndefault_sort = \"popularity\"\n").unwrap();
        assert_eq!(parsed.catalog.default_sort, SortKey::Featured);
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("elegance-cli-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("elegance.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_logging_section_reads_alone() {
        let path = temp_config(
            "logging-only",
            "[catalog]\ndefault_sort = 5\n\n[logging]\nlevel = \"warn\"\n",
        );

        let logging = StorefrontConfig::load_logging(&path).unwrap();
        assert_eq!(logging.level, LogLevel::Warn);
        assert!(StorefrontConfig::load(&path).is_err());

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_fallback_warnings_logged_on_load() {
        let path = temp_config(
            "fallback-warn",
            "[catalog]\ndefault_sort = \"popularity\"\ndefault_view = \"tiles\"\n",
        );

        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, || {
            StorefrontConfig::load(&path).unwrap()
        });

        assert_eq!(config.view_state(), ViewState::default());
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("unrecognised sort key"));
        assert!(logs.contains("unrecognised view mode"));

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_json_config() {
        let parsed: StorefrontConfig =
            serde_json::from_str(r#"{"catalog": {"default_view": "list"}}"#).unwrap();
        assert_eq!(parsed.catalog.default_view, ViewMode::List);
        assert_eq!(parsed.theme.default, Theme::Light);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = std::env::temp_dir().join(format!("elegance-cli-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut config = StorefrontConfig::default();
        config.catalog.default_sort = SortKey::Rating;
        config.theme.default = Theme::Dark;

        let toml_path = dir.join("elegance.toml");
        std::fs::write(&toml_path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(StorefrontConfig::load(&toml_path).unwrap(), config);

        let json_path = dir.join("elegance.json");
        std::fs::write(&json_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(StorefrontConfig::load(&json_path).unwrap(), config);

        assert!(StorefrontConfig::load(&dir.join("missing.toml")).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
