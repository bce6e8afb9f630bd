use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{action_service::ActionService, project_service::ProjectService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn project(&self) -> ProjectService {
        ProjectService::new(self.daos.project(), self.daos.action())
    }

    pub fn action(&self) -> ActionService {
        ActionService::new(self.daos.action(), self.daos.project())
    }
}
