use indexmap::IndexMap;

use crate::config::CatalogConfig;
use crate::constants::default_sources;

/// Fixed mapping from category name to its data source location.
///
/// Categories keep their registration order so the aggregate view and the
/// CLI list them the way the storefront displays them. Unknown categories
/// simply resolve to nothing; they are not an error anywhere in the crate.
pub struct SourceRegistry {
    sources: IndexMap<String, String>,
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new(default_sources())
    }
}

impl SourceRegistry {
    pub fn new(sources: IndexMap<String, String>) -> Self {
        Self { sources }
    }

    /// Builds a registry from configuration, applying `base_url` to
    /// relative locations.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let sources = config
            .sources
            .iter()
            .map(|(category, location)| {
                (
                    category.clone(),
                    resolve_location(config.base_url.as_deref(), location),
                )
            })
            .collect();
        Self { sources }
    }

    /// Registers (or replaces) a category's data source.
    pub fn register(&mut self, category: impl Into<String>, location: impl Into<String>) {
        self.sources.insert(category.into(), location.into());
    }

    /// Data source location for a category, if registered.
    pub fn location_for(&self, category: &str) -> Option<&str> {
        self.sources.get(category).map(|s| s.as_str())
    }

    /// All registered category names, in registration order.
    pub fn categories(&self) -> Vec<&str> {
        self.sources.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Prefixes relative locations with the base URL, if one is configured.
fn resolve_location(base_url: Option<&str>, location: &str) -> String {
    match base_url {
        Some(base) if !location.starts_with("http://") && !location.starts_with("https://") => {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                location.trim_start_matches('/')
            )
        }
        _ => location.to_string(),
    }
}
