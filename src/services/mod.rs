pub mod action_service;
pub mod context;
pub mod crud_service;
pub mod project_service;

pub use context::ServiceContext;
