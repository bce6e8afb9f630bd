use crate::{
    db::dao::{ActionDao, ProjectDao, ProjectRecord},
    db::entities::{RecordId, action, project},
    error::AppError,
    routes::extract::RecordResource,
    services::crud_service::{CrudErrors, CrudOp, CrudService, storage_error},
};

pub const PROJECT_ERRORS: CrudErrors = CrudErrors {
    create_failed: "There was an error while saving the project",
    find_failed: "Project info could not be retrieved.",
    list_failed: "Could not find list of projects.",
    not_found: "Could not find project.",
    update_failed: "The project info could not be modified",
    delete_failed: "The project could not be removed",
};

const PROJECT_ACTIONS_FAILED: &str = "Project action info could not be retrieved.";

#[derive(Clone)]
pub struct ProjectService {
    project_dao: ProjectDao,
    action_dao: ActionDao,
}

impl ProjectService {
    pub fn new(project_dao: ProjectDao, action_dao: ActionDao) -> Self {
        Self {
            project_dao,
            action_dao,
        }
    }

    pub async fn list_projects(&self) -> Result<Vec<project::Model>, AppError> {
        CrudService::find_all(self).await
    }

    pub async fn get_project(&self, id: RecordId) -> Result<project::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    /// Actions owned by the project; an unknown project simply owns none.
    pub async fn project_actions(&self, id: RecordId) -> Result<Vec<action::Model>, AppError> {
        self.action_dao
            .list_by_project(id)
            .await
            .map_err(|err| storage_error(CrudOp::List, PROJECT_ACTIONS_FAILED, &err))
    }

    pub async fn create_project(&self, record: ProjectRecord) -> Result<project::Model, AppError> {
        self.project_dao
            .create_project(record)
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))
    }

    pub async fn update_project(
        &self,
        id: RecordId,
        record: ProjectRecord,
    ) -> Result<project::Model, AppError> {
        self.project_dao
            .replace_project(id, record)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }

    /// A store that refuses the removal (still-referenced rows) reports the
    /// generic delete failure.
    pub async fn delete_project(&self, id: RecordId) -> Result<project::Model, AppError> {
        CrudService::delete(self, id).await
    }
}

impl RecordResource for ProjectService {
    const NOT_FOUND: &'static str = PROJECT_ERRORS.not_found;
}

impl CrudService for ProjectService {
    type Dao = ProjectDao;

    fn dao(&self) -> &Self::Dao {
        &self.project_dao
    }

    fn errors(&self) -> CrudErrors {
        PROJECT_ERRORS
    }
}
