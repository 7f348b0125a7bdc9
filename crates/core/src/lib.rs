//! projectdeck core - pure domain and command-palette logic
//!
//! This crate contains the project domain types, the mutation ports
//! (interfaces commands are allowed to invoke on host state), the command
//! providers for each screen, and the assistant panel state machine. It has
//! no dependencies on terminal rendering, persistence, or the event loop -
//! those are handled by adapters in the app crate.

pub mod command;
pub mod domain;
pub mod error;
pub mod palette;
pub mod ports;
pub mod providers;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
