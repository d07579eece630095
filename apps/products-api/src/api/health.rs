//! Readiness endpoint

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    HealthCheckFuture, errors::responses::ServiceUnavailableResponse, run_health_checks,
};
use database::postgres::check_health;

use crate::state::AppState;

/// Reports whether the product store is reachable
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture)> = Vec::new();
    if let Some(db) = &state.db {
        let check: HealthCheckFuture =
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) });
        checks.push(("database", check));
    }

    match run_health_checks(checks).await {
        Ok(ok) => ok.into_response(),
        Err(unavailable) => unavailable.into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
