pub mod ensure_schema;
pub mod insert_history;
pub mod select_newest;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

// Re-exports
pub use ensure_schema::*;
pub use insert_history::*;
pub use select_newest::*;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryHistoryRepository;
