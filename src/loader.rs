use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::collate;
use crate::constants::ALL_CATEGORIES;
use crate::error::Result;
use crate::fetch::{FetchCache, PayloadFetcher};
use crate::normalize::normalize_item;
use crate::registry::SourceRegistry;
use crate::types::Product;

/// Loads normalized product lists, per category or across all of them.
pub struct CatalogLoader {
    registry: SourceRegistry,
    cache: FetchCache,
    sample_per_category: usize,
}

impl CatalogLoader {
    pub fn new(
        registry: SourceRegistry,
        fetcher: Arc<dyn PayloadFetcher>,
        sample_per_category: usize,
    ) -> Self {
        Self {
            registry,
            cache: FetchCache::new(fetcher),
            sample_per_category,
        }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Normalized products for one category. A category with no registered
    /// source contributes nothing.
    pub async fn load_category(&self, category: &str) -> Result<Vec<Product>> {
        let Some(url) = self.registry.location_for(category) else {
            debug!(%category, "category has no registered source, returning empty list");
            return Ok(Vec::new());
        };

        let raw = self.cache.get(url).await?;
        let products: Vec<Product> = raw
            .iter()
            .map(|record| normalize_item(record, category))
            .collect();
        debug!(%category, count = products.len(), "loaded category");
        Ok(products)
    }

    /// Cross-category sample: up to `limit_per_category` items from every
    /// registered category, loaded concurrently and sorted by title.
    ///
    /// A category that fails to load contributes an empty list instead of
    /// aborting the aggregate.
    pub async fn load_all_mixed(&self, limit_per_category: usize) -> Vec<Product> {
        let loads = self
            .registry
            .categories()
            .into_iter()
            .map(|category| self.sample_category(category, limit_per_category));

        let mut combined: Vec<Product> = join_all(loads).await.into_iter().flatten().collect();
        collate::sort_by_title(&mut combined);
        combined
    }

    /// The first `count` items of the default aggregate, for the featured
    /// strip.
    pub async fn load_featured(&self, count: usize) -> Vec<Product> {
        let mut featured = self.load_all_mixed(self.sample_per_category).await;
        featured.truncate(count);
        featured
    }

    /// Resolves the "Todos" sentinel to the aggregate view and everything
    /// else to its category.
    pub async fn load_for_selection(&self, category: &str) -> Result<Vec<Product>> {
        if category == ALL_CATEGORIES {
            Ok(self.load_all_mixed(self.sample_per_category).await)
        } else {
            self.load_category(category).await
        }
    }

    async fn sample_category(&self, category: &str, limit: usize) -> Vec<Product> {
        match self.load_category(category).await {
            Ok(mut products) => {
                products.truncate(limit);
                products
            }
            Err(err) => {
                warn!(%category, error = %err, "skipping category after load failure");
                Vec::new()
            }
        }
    }
}
