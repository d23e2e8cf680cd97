pub mod db_init;
pub mod history_repository;

pub use db_init::{cleanup_database, init_database};
