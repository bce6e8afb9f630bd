pub mod action_dao;
pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod project_dao;

pub use action_dao::{ActionDao, ActionRecord};
pub use base::{DaoBase, DaoPager, PaginatedResponse};
pub use base_traits::{HasIdColumn, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use project_dao::{ProjectDao, ProjectRecord};
