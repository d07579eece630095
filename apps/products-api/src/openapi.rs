//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog API: paginated listing, lookup, creation, partial update and deletion"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        axum_helpers::server::health::health_handler,
        crate::api::health::ready,
    ),
    nest(
        (path = "/products", api = domain_products::handlers::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
