pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{PoolSettings, PostgresRepositories};
pub use repository::history_repository::HistoryRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
