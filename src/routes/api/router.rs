use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{actions, projects};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(projects::router(Arc::clone(&state)))
        .merge(actions::router(state))
}
