//! Products API routes

use axum::Router;
use domain_products::{InMemoryProductRepository, PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Products router over whichever store the state carries
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(ProductService::new(PgProductRepository::new(db.clone()))),
        None => handlers::router(ProductService::new(InMemoryProductRepository::new())),
    }
}

/// Create the products table when running on PostgreSQL
pub async fn ensure_schema(state: &AppState) -> eyre::Result<()> {
    if let Some(db) = &state.db {
        PgProductRepository::new(db.clone()).ensure_schema().await?;
    }
    Ok(())
}
