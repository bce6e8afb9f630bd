use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        dao::ProjectRecord,
        entities::{RecordId, project},
    },
    error::AppError,
    routes::{api::actions::ActionResponse, extract::PathId},
    services::{ServiceContext, project_service::ProjectService},
    state::AppState,
};

pub const MISSING_NAME_OR_DESCRIPTION: &str = "missing name or description";

/// Body of both project create and project replace.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/project/{id}/actions", get(project_actions))
        .with_state(state)
}

async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = ServiceContext::from_state(&state)
        .project()
        .list_projects()
        .await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

async fn get_project(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ProjectService>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = ServiceContext::from_state(&state)
        .project()
        .get_project(id)
        .await?;
    Ok(Json(project.into()))
}

async fn project_actions(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ProjectService>,
) -> Result<Json<Vec<ActionResponse>>, AppError> {
    let actions = ServiceContext::from_state(&state)
        .project()
        .project_actions(id)
        .await?;
    Ok(Json(actions.into_iter().map(ActionResponse::from).collect()))
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), AppError> {
    let record = body.into_record()?;
    let project = ServiceContext::from_state(&state)
        .project()
        .create_project(record)
        .await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

async fn update_project(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ProjectService>,
    Json(body): Json<ProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    let record = body.into_record()?;
    let project = ServiceContext::from_state(&state)
        .project()
        .update_project(id, record)
        .await?;
    Ok(Json(project.into()))
}

async fn delete_project(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ProjectService>,
) -> Result<Json<ProjectResponse>, AppError> {
    let removed = ServiceContext::from_state(&state)
        .project()
        .delete_project(id)
        .await?;
    Ok(Json(removed.into()))
}

impl ProjectRequest {
    fn into_record(self) -> Result<ProjectRecord, AppError> {
        let name = non_empty(self.name);
        let description = non_empty(self.description);
        let (Some(name), Some(description)) = (name, description) else {
            return Err(AppError::bad_request(MISSING_NAME_OR_DESCRIPTION));
        };
        Ok(ProjectRecord {
            name,
            description,
            completed: self.completed.unwrap_or(false),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl From<project::Model> for ProjectResponse {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            completed: model.completed,
        }
    }
}
