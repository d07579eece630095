use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Page, PageRequest, Product};

/// Product persistence. Records are plain values; the store owns id assignment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One window of all products in ascending id order, plus the total count
    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Upsert. `id: None` inserts under a fresh id, `Some(id)` replaces or creates that record.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove the record if present. Absent ids are not an error.
    async fn delete_by_id(&self, id: i64) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>> {
        let products = self.products.read().await;

        let content: Vec<Product> = products
            .values()
            .skip(to_usize(request.offset))
            .take(to_usize(request.limit))
            .cloned()
            .collect();

        Ok(Page::new(content, request, products.len() as u64))
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = match product.id {
            Some(id) => {
                // Keep generated ids clear of explicitly saved ones
                self.last_id.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
        };

        let saved = Product {
            id: Some(id),
            ..product
        };
        if products.insert(id, saved.clone()).is_none() {
            tracing::info!(product_id = id, "Created product");
        }

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }

        Ok(())
    }
}
