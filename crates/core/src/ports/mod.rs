pub mod board;
pub mod catalog;

// Re-exports
pub use board::*;
pub use catalog::*;
