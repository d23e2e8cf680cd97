pub mod repo_impl;
pub use repo_impl::HistoryRepositoryImpl;

pub mod ensure_schema;
pub mod insert;
pub mod select_newest;
pub mod test_utils;
