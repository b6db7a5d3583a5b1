pub mod query;
pub mod summary;
pub mod transaction;
