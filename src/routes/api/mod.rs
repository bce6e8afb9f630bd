pub mod actions;
pub mod projects;
mod router;

pub use router::router;
