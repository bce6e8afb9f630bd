pub mod api;
mod entry;
pub mod extract;
pub mod middleware;

pub use entry::{API_PREFIX, REQUEST_ID_HEADER, app, router};
