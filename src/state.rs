use tracing::debug;

use crate::constants::ALL_CATEGORIES;
use crate::error::Result;
use crate::loader::CatalogLoader;
use crate::pagination::{self, PageControl};
use crate::types::Product;

/// Browsing state for one catalog session: the selected category and
/// search text plus the derived, paginated view.
///
/// All transitions go through `&mut self`, so a newer category load can
/// never be overwritten by a stale one.
pub struct CatalogState {
    search: String,
    category: String,
    page: usize,
    page_size: usize,
    base_list: Vec<Product>,
    view_list: Vec<Product>,
    total_pages: usize,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
            page_size: page_size.max(1),
            base_list: Vec::new(),
            view_list: Vec::new(),
            total_pages: 1,
        }
    }

    /// Selects a category and replaces the base list from its loader.
    ///
    /// On a load failure the base list is cleared before the error
    /// propagates, so the session shows the empty state rather than stale
    /// products.
    pub async fn set_category(&mut self, loader: &CatalogLoader, category: &str) -> Result<()> {
        self.category = category.to_string();
        self.page = 1;
        match loader.load_for_selection(category).await {
            Ok(products) => {
                self.base_list = products;
                self.apply_search();
                Ok(())
            }
            Err(err) => {
                self.base_list.clear();
                self.apply_search();
                Err(err)
            }
        }
    }

    /// Updates the search text and recomputes the view from page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
        self.apply_search();
    }

    /// Moves to page `n`, clamped to the valid range. No refiltering.
    pub fn set_page(&mut self, n: usize) {
        self.page = n.clamp(1, self.total_pages);
    }

    /// Recomputes the filtered view and paging bounds from the base list.
    fn apply_search(&mut self) {
        let query = self.search.trim().to_lowercase();
        self.view_list = if query.is_empty() {
            self.base_list.clone()
        } else {
            self.base_list
                .iter()
                .filter(|p| {
                    p.title.to_lowercase().contains(&query)
                        || p.description.to_lowercase().contains(&query)
                        || p.id.to_lowercase().contains(&query)
                })
                .cloned()
                .collect()
        };
        self.total_pages = self.view_list.len().div_ceil(self.page_size).max(1);
        // The page can only shrink here, never grow
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
        debug!(
            category = %self.category,
            query = %query,
            matches = self.view_list.len(),
            total_pages = self.total_pages,
            "recomputed view"
        );
    }

    /// The slice of the filtered view shown on the current page.
    pub fn current_page_items(&self) -> &[Product] {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.view_list.len());
        self.view_list.get(start..end).unwrap_or(&[])
    }

    /// Page controls for the current view.
    pub fn pagination(&self) -> Vec<PageControl> {
        pagination::plan(self.page, self.total_pages)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn result_count(&self) -> usize {
        self.view_list.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::fetch::PayloadFetcher;
    use crate::registry::SourceRegistry;
    use async_trait::async_trait;
    use indexmap::IndexMap;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Arc;

    struct StaticFetcher {
        payloads: HashMap<String, Value>,
    }

    #[async_trait]
    impl PayloadFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<Value> {
            self.payloads
                .get(url)
                .cloned()
                .ok_or_else(|| CatalogError::Load {
                    url: url.to_string(),
                    message: "not found".to_string(),
                })
        }
    }

    fn loader_with(payloads: Vec<(&str, &str, Value)>) -> CatalogLoader {
        let mut registry = SourceRegistry::new(IndexMap::new());
        let mut map = HashMap::new();
        for (category, url, payload) in payloads {
            registry.register(category, url);
            map.insert(url.to_string(), payload);
        }
        CatalogLoader::new(registry, Arc::new(StaticFetcher { payloads: map }), 2)
    }

    fn numbered_items(count: usize) -> Value {
        Value::Array(
            (1..=count)
                .map(|n| json!({ "id": format!("p-{n:02}"), "title": format!("Producto {n:02}") }))
                .collect(),
        )
    }

    async fn state_with_items(count: usize, page_size: usize) -> CatalogState {
        let loader = loader_with(vec![("Hogar", "data/hogar.json", numbered_items(count))]);
        let mut state = CatalogState::new(page_size);
        state.set_category(&loader, "Hogar").await.unwrap();
        state
    }

    #[tokio::test]
    async fn page_count_follows_the_view_size() {
        let state = state_with_items(30, 12).await;
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.current_page_items().len(), 12);
    }

    #[tokio::test]
    async fn set_page_clamps_to_the_valid_range() {
        let mut state = state_with_items(30, 12).await;

        state.set_page(5);
        assert_eq!(state.page(), 3);
        assert_eq!(state.current_page_items().len(), 6);

        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[tokio::test]
    async fn search_matches_title_description_and_id() {
        let loader = loader_with(vec![(
            "Teléfonos",
            "data/telefonos.json",
            json!([
                { "id": "tel-01", "title": "Teléfono X", "desc": "128 GB" },
                { "id": "acc-07", "title": "Cable", "desc": "USB-C de un metro" },
                { "id": "acc-12", "title": "Audífono", "desc": "Ideal para tu teléfono" },
            ]),
        )]);
        let mut state = CatalogState::new(12);
        state.set_category(&loader, "Teléfonos").await.unwrap();

        state.set_search("tel");
        let titles: Vec<_> = state
            .current_page_items()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Teléfono X", "Audífono"]);

        // Substring on id alone also matches
        state.set_search("ACC-07");
        assert_eq!(state.result_count(), 1);
    }

    #[tokio::test]
    async fn search_never_grows_the_result_set() {
        let mut state = state_with_items(30, 12).await;
        let unfiltered = state.result_count();

        for query in ["Producto", "producto 1", "p-2", "nada que ver"] {
            state.set_search(query);
            assert!(state.result_count() <= unfiltered);
        }
    }

    #[tokio::test]
    async fn search_resets_and_clamps_the_page() {
        let mut state = state_with_items(30, 12).await;
        state.set_page(3);

        state.set_search("Producto 0");
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.result_count(), 9);
    }

    #[tokio::test]
    async fn empty_view_still_has_one_page() {
        let mut state = state_with_items(5, 12).await;
        state.set_search("inexistente");

        assert_eq!(state.result_count(), 0);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page(), 1);
        assert!(state.current_page_items().is_empty());
        assert!(state.pagination().is_empty());
    }

    #[tokio::test]
    async fn blank_search_restores_the_base_list() {
        let mut state = state_with_items(8, 12).await;
        state.set_search("Producto 03");
        assert_eq!(state.result_count(), 1);

        state.set_search("   ");
        assert_eq!(state.result_count(), 8);
    }

    #[tokio::test]
    async fn failed_load_clears_the_list_and_propagates() {
        let loader = loader_with(vec![("Hogar", "data/hogar.json", numbered_items(4))]);
        let mut state = CatalogState::new(12);
        state.set_category(&loader, "Hogar").await.unwrap();
        assert_eq!(state.result_count(), 4);

        // Registered in a different loader, so this fetch fails
        let mut registry = SourceRegistry::new(IndexMap::new());
        registry.register("Cosméticos", "data/cosmeticos.json");
        let broken = CatalogLoader::new(
            registry,
            Arc::new(StaticFetcher {
                payloads: HashMap::new(),
            }),
            2,
        );

        let err = state.set_category(&broken, "Cosméticos").await.unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));
        assert_eq!(state.result_count(), 0);
        assert_eq!(state.total_pages(), 1);
        assert!(state.current_page_items().is_empty());
    }

    #[tokio::test]
    async fn unknown_category_selects_an_empty_view() {
        let loader = loader_with(vec![("Hogar", "data/hogar.json", numbered_items(4))]);
        let mut state = CatalogState::new(12);

        state.set_category(&loader, "Repuestos").await.unwrap();
        assert_eq!(state.result_count(), 0);
        assert_eq!(state.total_pages(), 1);
    }
}
