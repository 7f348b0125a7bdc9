use crate::domain::{BoardView, ProjectDraft};

/// Modal surfaces of the board screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardModal {
    NewPage,
    NewStory,
    NewFile,
    Generate,
    FullGeneration,
    Auth,
    Colors,
    Components,
}

impl BoardModal {
    pub fn title(&self) -> &'static str {
        match self {
            BoardModal::NewPage => "New Page",
            BoardModal::NewStory => "New Story",
            BoardModal::NewFile => "New File",
            BoardModal::Generate => "AI Generate",
            BoardModal::FullGeneration => "AI Full Generation",
            BoardModal::Auth => "Auth Settings",
            BoardModal::Colors => "Color Settings",
            BoardModal::Components => "Component Settings",
        }
    }
}

/// Mutations the board screen accepts from commands
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    OpenModal(BoardModal),

    /// Switch the board view. All four views are terminal states; any view
    /// may switch to any other directly.
    SetView(BoardView),

    /// Replace the editable project draft
    SetDraft(ProjectDraft),

    /// Flip the "is editing" flag
    SetEditing(bool),
}

/// The set of operations board commands may invoke on host state.
/// Same fire-and-forget contract as [`crate::ports::CatalogPort`].
pub trait BoardPort {
    fn dispatch(&self, action: BoardAction);
}
