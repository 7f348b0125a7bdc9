//! projectdeck application library
//!
//! Exposes the host application (TUI model, adapters, config, storage) for
//! integration tests and external usage.

pub mod adapters;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod store;
pub mod tui;
