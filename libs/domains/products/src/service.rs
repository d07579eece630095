//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Page, PageRequest, Product, ProductUpdate};
use crate::repository::ProductRepository;

/// Product service providing the catalog operations.
///
/// Each operation is a single store call; there are no retries.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, request: PageRequest) -> ProductResult<Page<Product>> {
        self.repository.find_page(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Persist a new product built from every supplied field
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductUpdate) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.save(Product::from(input)).await
    }

    /// Merge `patch` into the stored product. Absent fields are left untouched.
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: i64, patch: ProductUpdate) -> ProductResult<Product> {
        patch
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let existing = self.get_product(id).await?;
        self.repository.save(existing.merge(patch)).await
    }

    /// Succeeds whether or not the product exists
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryStatus;
    use crate::repository::MockProductRepository;
    use mockall::predicate::{always, eq};

    fn watch() -> Product {
        Product {
            id: Some(1),
            code: Some("P001".to_string()),
            price: Some(100.0),
            inventory_status: Some(InventoryStatus::InStock),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(watch())));

        let service = ProductService::new(mock_repo);

        assert_eq!(service.get_product(1).await.unwrap(), watch());
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.get_product(999).await,
            Err(ProductError::NotFound(999))
        ));
    }

    #[tokio::test]
    async fn test_create_saves_without_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_save()
            .withf(|p| p.id.is_none() && p.name.as_deref() == Some("Blue Band"))
            .times(1)
            .returning(|p| Ok(Product { id: Some(10), ..p }));

        let service = ProductService::new(mock_repo);
        let created = service
            .create_product(ProductUpdate {
                name: Some("Blue Band".into()),
                quantity: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(10));
        assert_eq!(created.quantity, Some(2));
    }

    #[tokio::test]
    async fn test_create_rejects_overlong_field_before_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_save().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(ProductUpdate {
                category: Some("x".repeat(300)),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_merges_patch_and_keeps_other_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(watch())));
        mock_repo.expect_save().times(1).returning(Ok);

        let service = ProductService::new(mock_repo);
        let updated = service
            .update_product(
                1,
                ProductUpdate {
                    code: Some("P001-Updated".into()),
                    price: Some(150.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.code.as_deref(), Some("P001-Updated"));
        assert_eq!(updated.price, Some(150.0));
        assert_eq!(updated.inventory_status, Some(InventoryStatus::InStock));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_never_saves() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_save().never();

        let service = ProductService::new(mock_repo);
        let result = service.update_product(999, ProductUpdate::default()).await;

        assert!(matches!(result, Err(ProductError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_delete_delegates_unconditionally() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(()));

        let service = ProductService::new(mock_repo);

        assert!(service.delete_product(42).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_propagates_store_failure() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_page()
            .with(always())
            .returning(|_| Err(ProductError::Database("pool timed out".into())));

        let service = ProductService::new(mock_repo);
        let result = service.list_products(PageRequest::new(0, 10)).await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }
}
