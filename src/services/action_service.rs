use crate::{
    db::dao::{ActionDao, ActionRecord, DaoLayerError, ProjectDao},
    db::entities::{RecordId, action},
    error::AppError,
    routes::extract::RecordResource,
    services::crud_service::{CrudErrors, CrudOp, CrudService},
};

pub const ACTION_ERRORS: CrudErrors = CrudErrors {
    create_failed: "There was an error while saving the action",
    find_failed: "Action info could not be retrieved.",
    list_failed: "Could not find list of actions.",
    not_found: "Could not find action.",
    update_failed: "The action info could not be modified",
    delete_failed: "The action could not be removed",
};

pub const NO_SUCH_PROJECT: &str = "no project with that id";

#[derive(Clone)]
pub struct ActionService {
    action_dao: ActionDao,
    project_dao: ProjectDao,
}

impl ActionService {
    pub fn new(action_dao: ActionDao, project_dao: ProjectDao) -> Self {
        Self {
            action_dao,
            project_dao,
        }
    }

    pub async fn list_actions(&self) -> Result<Vec<action::Model>, AppError> {
        CrudService::find_all(self).await
    }

    pub async fn get_action(&self, id: RecordId) -> Result<action::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    pub async fn create_action(&self, record: ActionRecord) -> Result<action::Model, AppError> {
        self.require_project(record.project_id, CrudOp::Create)
            .await?;
        self.action_dao
            .create_action(record)
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))
    }

    pub async fn update_action(
        &self,
        id: RecordId,
        record: ActionRecord,
    ) -> Result<action::Model, AppError> {
        self.require_project(record.project_id, CrudOp::Update)
            .await?;
        self.action_dao
            .replace_action(id, record)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }

    pub async fn delete_action(&self, id: RecordId) -> Result<action::Model, AppError> {
        CrudService::delete(self, id).await
    }

    async fn require_project(&self, project_id: RecordId, op: CrudOp) -> Result<(), AppError> {
        match self.project_dao.find_project(project_id).await {
            Ok(_) => Ok(()),
            Err(DaoLayerError::NotFound { .. }) => Err(AppError::not_found(NO_SUCH_PROJECT)),
            Err(err) => Err(self.map_error(op, err)),
        }
    }
}

impl RecordResource for ActionService {
    const NOT_FOUND: &'static str = ACTION_ERRORS.not_found;
}

impl CrudService for ActionService {
    type Dao = ActionDao;

    fn dao(&self) -> &Self::Dao {
        &self.action_dao
    }

    fn errors(&self) -> CrudErrors {
        ACTION_ERRORS
    }
}
