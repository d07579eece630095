//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Present only when the postgres store is configured
    pub db: Option<DatabaseConnection>,
}
