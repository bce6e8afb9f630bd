use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, routes::app, state::AppState};

/// Full application stack over the given connection, with default config.
pub fn test_app(db: DatabaseConnection) -> Router {
    app(AppState::new(AppConfig::default(), db))
}
