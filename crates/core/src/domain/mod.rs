pub mod project;

// Re-exports
pub use project::*;
