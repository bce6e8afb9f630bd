use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        dao::ActionRecord,
        entities::{
            RecordId,
            action::{self, DESCRIPTION_MAX_LEN},
        },
    },
    error::AppError,
    routes::extract::{PathId, parse_record_id},
    services::{
        ServiceContext,
        action_service::{ActionService, NO_SUCH_PROJECT},
    },
    state::AppState,
};

pub const MISSING_DESCRIPTION: &str = "missing description";
pub const DESCRIPTION_TOO_LONG: &str = "description too long";
pub const MISSING_UPDATE_FIELDS: &str = "missing project_id, description or completed";

#[derive(Debug, Deserialize)]
pub struct CreateActionRequest {
    pub description: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateActionRequest {
    pub project_id: Option<RecordId>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub id: RecordId,
    pub project_id: RecordId,
    pub description: String,
    pub notes: Option<String>,
    pub completed: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/actions", get(list_actions))
        .route(
            "/actions/{id}",
            get(get_action).put(update_action).delete(delete_action),
        )
        .route("/actions/project/{project_id}", post(create_action))
        .with_state(state)
}

async fn list_actions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ActionResponse>>, AppError> {
    let actions = ServiceContext::from_state(&state)
        .action()
        .list_actions()
        .await?;
    Ok(Json(actions.into_iter().map(ActionResponse::from).collect()))
}

async fn get_action(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ActionService>,
) -> Result<Json<ActionResponse>, AppError> {
    let action = ServiceContext::from_state(&state)
        .action()
        .get_action(id)
        .await?;
    Ok(Json(action.into()))
}

async fn create_action(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(body): Json<CreateActionRequest>,
) -> Result<(StatusCode, Json<ActionResponse>), AppError> {
    let description = validate_description(body.description, MISSING_DESCRIPTION)?;
    let project_id =
        parse_record_id(&project_id).ok_or_else(|| AppError::not_found(NO_SUCH_PROJECT))?;

    let record = ActionRecord {
        project_id,
        description,
        notes: body.notes,
        completed: body.completed.unwrap_or(false),
    };
    let action = ServiceContext::from_state(&state)
        .action()
        .create_action(record)
        .await?;
    Ok((StatusCode::CREATED, Json(action.into())))
}

async fn update_action(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ActionService>,
    Json(body): Json<UpdateActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let record = body.into_record()?;
    let action = ServiceContext::from_state(&state)
        .action()
        .update_action(id, record)
        .await?;
    Ok(Json(action.into()))
}

async fn delete_action(
    State(state): State<Arc<AppState>>,
    PathId(id, _): PathId<ActionService>,
) -> Result<Json<ActionResponse>, AppError> {
    let removed = ServiceContext::from_state(&state)
        .action()
        .delete_action(id)
        .await?;
    Ok(Json(removed.into()))
}

impl UpdateActionRequest {
    fn into_record(self) -> Result<ActionRecord, AppError> {
        let has_description = self
            .description
            .as_deref()
            .is_some_and(|description| !description.is_empty());
        let (Some(project_id), true, Some(completed)) =
            (self.project_id, has_description, self.completed)
        else {
            return Err(AppError::bad_request(MISSING_UPDATE_FIELDS));
        };

        Ok(ActionRecord {
            project_id,
            description: validate_description(self.description, MISSING_UPDATE_FIELDS)?,
            notes: self.notes,
            completed,
        })
    }
}

/// Present, non-empty, and at most [`DESCRIPTION_MAX_LEN`] characters.
fn validate_description(
    description: Option<String>,
    missing: &'static str,
) -> Result<String, AppError> {
    let description = description
        .filter(|description| !description.is_empty())
        .ok_or_else(|| AppError::bad_request(missing))?;
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(AppError::bad_request(DESCRIPTION_TOO_LONG));
    }
    Ok(description)
}

impl From<action::Model> for ActionResponse {
    fn from(model: action::Model) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            description: model.description,
            notes: model.notes,
            completed: model.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DESCRIPTION_TOO_LONG, MISSING_DESCRIPTION, MISSING_UPDATE_FIELDS, UpdateActionRequest,
        validate_description,
    };
    use crate::error::AppError;

    fn update(
        project_id: Option<i32>,
        description: Option<&str>,
        completed: Option<bool>,
    ) -> UpdateActionRequest {
        UpdateActionRequest {
            project_id,
            description: description.map(str::to_string),
            notes: None,
            completed,
        }
    }

    fn bad_request_message(err: AppError) -> String {
        match err {
            AppError::BadRequest(message) => message,
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[test]
    fn description_limit_counts_characters() {
        let at_limit = "é".repeat(128);
        assert_eq!(
            validate_description(Some(at_limit.clone()), MISSING_DESCRIPTION).ok(),
            Some(at_limit)
        );

        let err = validate_description(Some("x".repeat(129)), MISSING_DESCRIPTION)
            .expect_err("129 characters should be rejected");
        assert_eq!(bad_request_message(err), DESCRIPTION_TOO_LONG);
    }

    #[test]
    fn empty_description_is_missing() {
        for description in [None, Some(String::new())] {
            let err = validate_description(description, MISSING_DESCRIPTION)
                .expect_err("empty description should be rejected");
            assert_eq!(bad_request_message(err), MISSING_DESCRIPTION);
        }
    }

    #[test]
    fn whitespace_description_is_present() {
        assert_eq!(
            validate_description(Some("   ".to_string()), MISSING_DESCRIPTION).ok(),
            Some("   ".to_string())
        );
    }

    #[test]
    fn update_requires_project_description_and_completed() {
        for request in [
            update(None, Some("d"), Some(true)),
            update(Some(1), None, Some(true)),
            update(Some(1), Some(""), Some(false)),
            update(Some(1), Some("d"), None),
        ] {
            let err = request.into_record().expect_err("update should be rejected");
            assert_eq!(bad_request_message(err), MISSING_UPDATE_FIELDS);
        }
    }

    #[test]
    fn update_checks_length_after_presence() {
        let long = "x".repeat(129);
        let err = update(Some(1), Some(&long), Some(true))
            .into_record()
            .expect_err("long description should be rejected");
        assert_eq!(bad_request_message(err), DESCRIPTION_TOO_LONG);
    }

    #[test]
    fn update_builds_full_record() {
        let record = UpdateActionRequest {
            project_id: Some(4),
            description: Some("ship it".to_string()),
            notes: Some("soon".to_string()),
            completed: Some(true),
        }
        .into_record()
        .expect("valid update");
        assert_eq!(record.project_id, 4);
        assert_eq!(record.description, "ship it");
        assert_eq!(record.notes.as_deref(), Some("soon"));
        assert!(record.completed);
    }
}
