use crate::error::Result;

/// Closed category tags for board commands. Catalog commands are untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Page,
    Story,
    File,
    View,
    Project,
    Ai,
}

/// The executable payload of a command: zero arguments, side effects only
/// through the port handle it closes over. Invocation is the single place in
/// the core allowed to fail.
pub type CommandAction = Box<dyn Fn() -> Result<()>>;

/// A named, described, executable action with a stable identifier.
///
/// Commands are data: providers materialize them fresh on every request, so
/// an id is stable per logical action, not per materialization.
pub struct Command {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque glyph token for presentation; the core never interprets it
    pub icon: &'static str,
    /// Display-only key combination; global binding is the host's concern
    pub shortcut: Option<&'static str>,
    pub category: Option<CommandCategory>,
    action: CommandAction,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: &'static str,
        action: impl Fn() -> Result<()> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon,
            shortcut: None,
            category: None,
            action: Box::new(action),
        }
    }

    pub fn with_shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn with_category(mut self, category: CommandCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Invoke the action once. The caller owns debouncing; the command layer
    /// does not serialize repeated invocations.
    pub fn run(&self) -> Result<()> {
        (self.action)()
    }

    /// Case-insensitive substring match against name or description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}
