pub mod board;
pub mod catalog;

pub use board::BoardCommands;
pub use catalog::CatalogCommands;

use crate::command::Command;
use crate::error::{CoreError, Result};
use std::collections::HashSet;

/// A context-specific factory producing the command list valid for one screen.
///
/// Providers are cheap, hold only captured handles and snapshots, and are
/// rebuilt whenever the owning screen's relevant state changes. Both methods
/// are total: they never fail, only `Command::run` may.
pub trait CommandProvider {
    /// All commands for this context, in declared order
    fn commands(&self) -> Vec<Command>;

    /// Commands whose name or description contains the query,
    /// case-insensitively. An empty query returns the full list unchanged.
    fn search(&self, query: &str) -> Vec<Command> {
        if query.is_empty() {
            return self.commands();
        }
        self.commands()
            .into_iter()
            .filter(|command| command.matches(query))
            .collect()
    }
}

/// Checks the provider invariant that ids are pairwise unique within one
/// materialized command list.
pub fn ensure_unique_ids(commands: &[Command]) -> Result<()> {
    let mut seen = HashSet::new();
    for command in commands {
        if !seen.insert(command.id.as_str()) {
            return Err(CoreError::DuplicateCommandId {
                id: command.id.clone(),
            });
        }
    }
    Ok(())
}
