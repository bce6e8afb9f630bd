use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{RecordId, action, prelude::Action};

/// Writable columns of an action row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub project_id: RecordId,
    pub description: String,
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Clone)]
pub struct ActionDao {
    db: DatabaseConnection,
}

impl DaoBase for ActionDao {
    type Entity = Action;
    type Model = action::Model;
    type ActiveModel = action::ActiveModel;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ActionDao {
    pub async fn create_action(&self, record: ActionRecord) -> DaoResult<action::Model> {
        let model = action::ActiveModel {
            project_id: Set(record.project_id),
            description: Set(record.description),
            notes: Set(record.notes),
            completed: Set(record.completed),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_by_project(&self, project_id: RecordId) -> DaoResult<Vec<action::Model>> {
        self.find_all(move |query| query.filter(action::Column::ProjectId.eq(project_id)))
            .await
    }

    pub async fn replace_action(
        &self,
        id: RecordId,
        record: ActionRecord,
    ) -> DaoResult<action::Model> {
        self.update(id, move |active| {
            active.project_id = Set(record.project_id);
            active.description = Set(record.description);
            active.notes = Set(record.notes);
            active.completed = Set(record.completed);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::{ActionDao, ActionRecord};
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::action;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn action_model(id: i32, project_id: i32) -> action::Model {
        action::Model {
            id,
            project_id,
            description: format!("action {id}"),
            notes: None,
            completed: false,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[tokio::test]
    async fn list_by_project_returns_matching_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![action_model(1, 5), action_model(4, 5)]])
            .into_connection();
        let dao = ActionDao::new(&db);

        let actions = dao.list_by_project(5).await.expect("query should succeed");
        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|a| a.project_id == 5));
    }

    #[tokio::test]
    async fn replace_keeps_id_and_returns_updated_row() {
        let mut updated = action_model(9, 2);
        updated.description = "rewritten".to_string();
        updated.notes = Some("note".to_string());
        updated.completed = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[action_model(9, 1)]])
            .append_query_results([[updated.clone()]])
            .into_connection();
        let dao = ActionDao::new(&db);

        let result = dao
            .replace_action(
                9,
                ActionRecord {
                    project_id: 2,
                    description: "rewritten".to_string(),
                    notes: Some("note".to_string()),
                    completed: true,
                },
            )
            .await
            .expect("update should succeed");
        assert_eq!(result, updated);
    }

    #[tokio::test]
    async fn delete_reports_not_found_when_row_vanishes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[action_model(3, 1)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let dao = ActionDao::new(&db);

        let err = dao.delete(3).await.expect_err("delete should fail");
        assert!(matches!(err, DaoLayerError::NotFound { id: 3, .. }));
    }
}
