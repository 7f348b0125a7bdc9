//! Assistant panel state machine and the guarded command execution boundary.
//!
//! The panel owns no commands. The host hands it a [`CommandContext`] built
//! from the active screen; the panel asks the context for commands, narrows
//! them by query, and runs a selection behind the one place in the system
//! where an action error is absorbed instead of propagated.

use crate::command::Command;
use crate::providers::{BoardCommands, CatalogCommands, CommandProvider};

/// Which screen the palette is serving. Built by the host from its own
/// screen enum; the palette never inspects routes or capabilities itself.
pub enum CommandContext {
    Catalog(CatalogCommands),
    Board(BoardCommands),
    /// Unrecognized screen: zero commands, conversational mode only
    None,
}

impl CommandContext {
    pub fn commands(&self) -> Vec<Command> {
        match self {
            CommandContext::Catalog(provider) => provider.commands(),
            CommandContext::Board(provider) => provider.commands(),
            CommandContext::None => Vec::new(),
        }
    }

    pub fn search(&self, query: &str) -> Vec<Command> {
        match self {
            CommandContext::Catalog(provider) => provider.search(query),
            CommandContext::Board(provider) => provider.search(query),
            CommandContext::None => Vec::new(),
        }
    }

    /// Whether the command browser toggle should be available at all
    pub fn has_commands(&self) -> bool {
        !self.commands().is_empty()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommandContext::Catalog(_) => "Catalog",
            CommandContext::Board(_) => "Board",
            CommandContext::None => "Assistant",
        }
    }
}

/// Assistant panel states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Closed,
    /// Free-text chat, no command list shown
    Conversational,
    /// Search box plus filtered command list
    CommandBrowser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the panel's conversation history
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

/// Outcome of one guarded command execution, for user-facing display
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success { command: String },
    Failure { command: String, reason: String },
}

/// The floating assistant panel
#[derive(Debug, Default)]
pub struct AssistantPanel {
    pub mode: PanelMode,
    /// Free-text filter for the command browser
    pub query: String,
    /// Cursor into the currently visible command list
    pub selected: usize,
    pub history: Vec<ChatEntry>,
    /// Most recent execution outcome; each execution replaces the last
    notification: Option<Notification>,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode != PanelMode::Closed
    }

    /// Opening always lands in conversational mode
    pub fn open(&mut self) {
        if self.mode == PanelMode::Closed {
            self.mode = PanelMode::Conversational;
        }
    }

    pub fn close(&mut self) {
        self.mode = PanelMode::Closed;
    }

    /// Flip between conversational and command-browser modes. Entering the
    /// browser requires the context to yield at least one command; otherwise
    /// this is a no-op and the panel stays conversational.
    pub fn toggle_browser(&mut self, context: &CommandContext) {
        match self.mode {
            PanelMode::CommandBrowser => {
                self.mode = PanelMode::Conversational;
            }
            PanelMode::Conversational if context.has_commands() => {
                self.mode = PanelMode::CommandBrowser;
                self.query.clear();
                self.selected = 0;
            }
            _ => {}
        }
    }

    /// Commands currently shown in the browser: the context's list narrowed
    /// by the live query, in the provider's declared order.
    pub fn visible_commands(&self, context: &CommandContext) -> Vec<Command> {
        context.search(&self.query)
    }

    /// Replace the browser query and reset the selection cursor
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.selected = 0;
    }

    pub fn push_user_line(&mut self, text: String) {
        self.history.push(ChatEntry {
            role: ChatRole::User,
            text,
        });
    }

    pub fn push_assistant_line(&mut self, text: String) {
        self.history.push(ChatEntry {
            role: ChatRole::Assistant,
            text,
        });
    }

    /// Run one command inside the guarded boundary.
    ///
    /// Success and failure both become a notification naming the command;
    /// an action error is absorbed here and never reaches the caller. Either
    /// way the browser sub-view closes back to conversational while the panel
    /// itself stays open, and the chat history is untouched.
    pub fn execute(&mut self, command: &Command) -> Notification {
        let notification = match command.run() {
            Ok(()) => Notification::Success {
                command: command.name.clone(),
            },
            Err(err) => Notification::Failure {
                command: command.name.clone(),
                reason: err.to_string(),
            },
        };
        self.notification = Some(notification.clone());

        if self.mode == PanelMode::CommandBrowser {
            self.mode = PanelMode::Conversational;
        }
        notification
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }
}
