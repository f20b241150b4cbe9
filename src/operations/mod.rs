pub mod compose;
pub mod creation;
pub mod query;
