use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::constants::{
    default_sources, ALL_SAMPLE_PER_CATEGORY, DEFAULT_PAGE_SIZE, FEATURED_COUNT,
};
use crate::error::{CatalogError, Result};

/// Runtime configuration for the storefront catalog.
///
/// Every field has a built-in default, so a config file only needs to name
/// what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number that receives the outbound WhatsApp messages
    pub whatsapp_number: String,
    /// Pre-filled message for general contact links
    pub whatsapp_text_general: String,
    /// Products shown per page
    pub page_size: usize,
    /// Items shown in the featured strip
    pub featured_count: usize,
    /// Items sampled per category for the "Todos" view
    pub all_sample_per_category: usize,
    /// Prefix applied to relative source locations
    pub base_url: Option<String>,
    /// Category -> data source location, in display order
    pub sources: IndexMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "+584120000000".to_string(),
            whatsapp_text_general: "Hola, me interesa su catálogo.".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            featured_count: FEATURED_COUNT,
            all_sample_per_category: ALL_SAMPLE_PER_CATEGORY,
            base_url: None,
            sources: default_sources(),
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves configuration from the CATALOG_CONFIG environment variable,
    /// falling back to the built-in defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var("CATALOG_CONFIG") {
            Ok(path) => Self::load(path),
            Err(_) => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
