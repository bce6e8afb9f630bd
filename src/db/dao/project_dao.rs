use sea_orm::{DatabaseConnection, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{RecordId, prelude::Project, project};

/// Writable columns of a project row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Clone)]
pub struct ProjectDao {
    db: DatabaseConnection,
}

impl DaoBase for ProjectDao {
    type Entity = Project;
    type Model = project::Model;
    type ActiveModel = project::ActiveModel;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProjectDao {
    pub async fn create_project(&self, record: ProjectRecord) -> DaoResult<project::Model> {
        let model = project::ActiveModel {
            name: Set(record.name),
            description: Set(record.description),
            completed: Set(record.completed),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_project(&self, id: RecordId) -> DaoResult<project::Model> {
        self.find_by_id(id).await
    }

    pub async fn replace_project(
        &self,
        id: RecordId,
        record: ProjectRecord,
    ) -> DaoResult<project::Model> {
        self.update(id, move |active| {
            active.name = Set(record.name);
            active.description = Set(record.description);
            active.completed = Set(record.completed);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::{ProjectDao, ProjectRecord};
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::project;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn project_model(id: i32, name: &str) -> project::Model {
        project::Model {
            id,
            name: name.to_string(),
            description: "desc".to_string(),
            completed: false,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[tokio::test]
    async fn create_returns_stored_row_with_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[project_model(7, "P1")]])
            .into_connection();
        let dao = ProjectDao::new(&db);

        let created = dao
            .create_project(ProjectRecord {
                name: "P1".to_string(),
                description: "desc".to_string(),
                completed: false,
            })
            .await
            .expect("insert should succeed");
        assert_eq!(created.id, 7);
        assert_eq!(created.name, "P1");
    }

    #[tokio::test]
    async fn list_collects_rows_in_one_page() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_model(1, "a"), project_model(2, "b")]])
            .into_connection();
        let dao = ProjectDao::new(&db);

        let projects = dao.find_all(|query| query).await.expect("list should succeed");
        let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn replace_of_missing_project_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<project::Model>::new()])
            .into_connection();
        let dao = ProjectDao::new(&db);

        let err = dao
            .replace_project(
                42,
                ProjectRecord {
                    name: "n".to_string(),
                    description: "d".to_string(),
                    completed: true,
                },
            )
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn delete_returns_removed_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[project_model(3, "gone")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let dao = ProjectDao::new(&db);

        let removed = dao.delete(3).await.expect("delete should succeed");
        assert_eq!(removed.name, "gone");
    }

    #[tokio::test]
    async fn query_failures_surface_as_db_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let dao = ProjectDao::new(&db);

        let err = dao.find_project(1).await.expect_err("query should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
