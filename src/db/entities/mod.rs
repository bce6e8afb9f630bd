#[allow(unused_imports)]
pub mod prelude {
    pub use super::action::Entity as Action;
    pub use super::project::Entity as Project;
}

pub mod action;
pub mod project;

/// Store-assigned primary key shared by every table.
pub type RecordId = i32;
