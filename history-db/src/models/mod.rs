pub mod identifiable;
pub mod history;

// Re-exports
pub use identifiable::*;
pub use history::*;
