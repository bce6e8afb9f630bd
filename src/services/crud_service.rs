use crate::db::dao::{DaoBase, DaoLayerError};
use crate::db::entities::RecordId;
use crate::error::AppError;

type CrudModel<D> = <D as DaoBase>::Model;

/// Client-facing messages for one resource, one per failing operation.
#[derive(Clone, Copy)]
pub struct CrudErrors {
    pub create_failed: &'static str,
    pub find_failed: &'static str,
    pub list_failed: &'static str,
    pub not_found: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

impl Default for CrudErrors {
    fn default() -> Self {
        Self {
            create_failed: "Create failed",
            find_failed: "Find failed",
            list_failed: "List failed",
            not_found: "Resource not found",
            update_failed: "Update failed",
            delete_failed: "Delete failed",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum CrudOp {
    Create,
    Find,
    List,
    Update,
    Delete,
}

impl CrudOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CrudOp::Create => "create",
            CrudOp::Find => "find",
            CrudOp::List => "list",
            CrudOp::Update => "update",
            CrudOp::Delete => "delete",
        }
    }
}

/// Logs the storage failure and returns the generic message for the caller.
pub fn storage_error(op: CrudOp, message: &'static str, err: &DaoLayerError) -> AppError {
    tracing::error!(operation = op.as_str(), error = %err, "storage call failed");
    AppError::internal(message)
}

#[allow(async_fn_in_trait)]
pub trait CrudService {
    type Dao: DaoBase;

    fn dao(&self) -> &Self::Dao;

    fn errors(&self) -> CrudErrors {
        CrudErrors::default()
    }

    fn map_error(&self, op: CrudOp, err: DaoLayerError) -> AppError {
        let errors = self.errors();
        if let DaoLayerError::NotFound { .. } = err {
            return AppError::not_found(errors.not_found);
        }
        let message = match op {
            CrudOp::Create => errors.create_failed,
            CrudOp::Find => errors.find_failed,
            CrudOp::List => errors.list_failed,
            CrudOp::Update => errors.update_failed,
            CrudOp::Delete => errors.delete_failed,
        };
        storage_error(op, message, &err)
    }

    async fn find_all(&self) -> Result<Vec<CrudModel<Self::Dao>>, AppError> {
        self.dao()
            .find_all(|query| query)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<CrudModel<Self::Dao>, AppError> {
        self.dao()
            .find_by_id(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }

    async fn delete(&self, id: RecordId) -> Result<CrudModel<Self::Dao>, AppError> {
        self.dao()
            .delete(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Delete, err))
    }
}
