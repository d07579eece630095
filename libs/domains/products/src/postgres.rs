use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, Statement};

use crate::{
    entity,
    error::ProductResult,
    models::{Page, PageRequest, Product},
    repository::ProductRepository,
};

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    code VARCHAR(255),
    name VARCHAR(255),
    description TEXT,
    image VARCHAR(255),
    category VARCHAR(255),
    price DOUBLE PRECISION,
    quantity INTEGER,
    internal_reference VARCHAR(255),
    shell_id BIGINT,
    inventory_status VARCHAR(32),
    rating DOUBLE PRECISION
)"#;

// An explicit id bypasses BIGSERIAL, so move the sequence past it
const ADVANCE_ID_SEQUENCE: &str =
    "SELECT setval('products_id_seq', GREATEST($1, last_value)) FROM products_id_seq";

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create the `products` table if it does not exist yet. Idempotent.
    pub async fn ensure_schema(&self) -> ProductResult<()> {
        self.base
            .db()
            .execute_unprepared(CREATE_PRODUCTS_TABLE)
            .await?;

        tracing::info!("Products table ready");
        Ok(())
    }

    async fn upsert(&self, id: i64, active_model: entity::ActiveModel) -> ProductResult<Product> {
        let model = entity::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::Id)
                    .update_columns(entity::MUTABLE_COLUMNS)
                    .to_owned(),
            )
            .exec_with_returning(self.base.db())
            .await?;

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            ADVANCE_ID_SEQUENCE,
            [id.into()],
        );
        self.base.db().query_one_raw(stmt).await?;

        tracing::debug!(product_id = id, "Saved product");
        Ok(model.into())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>> {
        let total = self.base.count().await?;
        let models = self
            .base
            .fetch_page(request.offset, request.limit, entity::Column::Id)
            .await?;

        let content = models.into_iter().map(Product::from).collect();
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Product::from))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model = entity::ActiveModel::from(product);

        match id {
            Some(id) => self.upsert(id, active_model).await,
            None => {
                let model = self.base.insert(active_model).await?;
                tracing::info!(product_id = model.id, "Created product");
                Ok(model.into())
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::models::InventoryStatus;
    use sea_orm::{DbErr, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn model(id: i64, code: &str) -> entity::Model {
        entity::Model {
            id,
            code: Some(code.to_string()),
            name: None,
            description: None,
            image: None,
            category: None,
            price: Some(100.0),
            quantity: None,
            internal_reference: None,
            shell_id: None,
            inventory_status: Some(InventoryStatus::InStock),
            rating: None,
        }
    }

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "P001")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.find_by_id(1).await.unwrap().unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.code.as_deref(), Some("P001"));
        assert_eq!(product.inventory_status, Some(InventoryStatus::InStock));
    }

    #[tokio::test]
    async fn test_find_page_combines_count_and_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(25)]])
            .append_query_results([vec![model(21, "a"), model(22, "b")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let page = repo.find_page(PageRequest::new(20, 10)).await.unwrap();

        assert_eq!(page.total_elements, 25);
        assert_eq!(page.number, 2);
        assert_eq!(page.content.len(), 2);
    }

    #[tokio::test]
    async fn test_save_new_product_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "NEW")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let saved = repo
            .save(Product {
                code: Some("NEW".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(7));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete_by_id(404).await.is_ok());
    }

    #[tokio::test]
    async fn test_query_failure_becomes_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.find_by_id(1).await.unwrap_err();

        assert!(matches!(err, ProductError::Database(msg) if msg.contains("connection reset")));
    }
}
