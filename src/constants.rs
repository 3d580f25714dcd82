//! Category name constants and catalog defaults, shared by the CLI,
//! configuration and test fixtures.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

pub const TELEFONOS: &str = "Teléfonos";
pub const COMPUTADORAS: &str = "Computadoras";
pub const ACCESORIOS: &str = "Accesorios";
pub const HOGAR: &str = "Hogar";
pub const COSMETICOS: &str = "Cosméticos";

/// Sentinel category that selects the cross-category aggregate view
pub const ALL_CATEGORIES: &str = "Todos";

// Normalization defaults
pub const DEFAULT_TITLE: &str = "Producto";
pub const DEFAULT_CATEGORY: &str = "Varios";

// Paging
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const PAGE_WINDOW: usize = 7;

// Aggregate ("Todos") sampling
pub const ALL_SAMPLE_PER_CATEGORY: usize = 2;
pub const FEATURED_COUNT: usize = 4;

static DEFAULT_SOURCES: Lazy<IndexMap<String, String>> = Lazy::new(|| {
    IndexMap::from([
        (TELEFONOS.to_string(), "data/telefonos.json".to_string()),
        (COMPUTADORAS.to_string(), "data/computadoras.json".to_string()),
        (ACCESORIOS.to_string(), "data/accesorios.json".to_string()),
        (HOGAR.to_string(), "data/hogar.json".to_string()),
        (COSMETICOS.to_string(), "data/cosmeticos.json".to_string()),
    ])
});

/// Built-in category -> data source table, in display order
pub fn default_sources() -> IndexMap<String, String> {
    DEFAULT_SOURCES.clone()
}
