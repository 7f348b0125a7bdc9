use crossbeam_channel::{unbounded, Receiver, Sender};
use projectdeck_core::domain::{
    BoardView, CatalogLayout, Project, ProjectDraft, ProjectId, ProjectStatus, SortOption,
    StatusFilter,
};
use projectdeck_core::palette::{AssistantPanel, CommandContext, Notification};
use projectdeck_core::ports::{BoardAction, BoardModal, CatalogAction};
use projectdeck_core::providers::{BoardCommands, CatalogCommands};
use std::rc::Rc;
use tracing::info;

use crate::adapters::{ChannelBoardPort, ChannelCatalogPort, HostAction};
use crate::config::Config;

/// State of the project catalog screen
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub layout: CatalogLayout,
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort: SortOption,
    pub new_project_modal: bool,
    /// Buffer for the new-project modal's name input
    pub new_project_name: String,
    pub search_focused: bool,
    pub selected: usize,
}

impl CatalogState {
    pub fn new(layout: CatalogLayout, sort: SortOption) -> Self {
        Self {
            layout,
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort,
            new_project_modal: false,
            new_project_name: String::new(),
            search_focused: false,
            selected: 0,
        }
    }
}

/// State of the board screen for one loaded project
#[derive(Debug, Clone)]
pub struct BoardState {
    pub project_id: ProjectId,
    pub view: BoardView,
    pub modal: Option<BoardModal>,
    pub draft: Option<ProjectDraft>,
    pub editing: bool,
}

impl BoardState {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            view: BoardView::Kanban,
            modal: None,
            draft: None,
            editing: false,
        }
    }
}

/// The active screen. The palette's context is derived from this, so an
/// unrecognized screen (About) naturally yields zero commands.
#[derive(Debug, Clone)]
pub enum Screen {
    Catalog(CatalogState),
    Board(BoardState),
    About,
}

/// The TUI model: complete application state plus the host action channel
/// that command executions feed back through.
pub struct AppModel {
    pub projects: Vec<Project>,
    pub screen: Screen,
    pub panel: AssistantPanel,
    /// Draft of the chat line being typed in the panel
    pub panel_input: String,
    pub should_quit: bool,
    default_layout: CatalogLayout,
    default_sort: SortOption,
    actions_tx: Sender<HostAction>,
    actions_rx: Receiver<HostAction>,
}

impl AppModel {
    pub fn new(config: &Config, projects: Vec<Project>) -> Self {
        let (actions_tx, actions_rx) = unbounded();
        Self {
            projects,
            screen: Screen::Catalog(CatalogState::new(
                config.ui.default_layout,
                config.ui.default_sort,
            )),
            panel: AssistantPanel::new(),
            panel_input: String::new(),
            should_quit: false,
            default_layout: config.ui.default_layout,
            default_sort: config.ui.default_sort,
            actions_tx,
            actions_rx,
        }
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Build the palette context for the active screen.
    ///
    /// Providers are cheap factories and are rebuilt on every call, so the
    /// layout/project/view snapshots they capture are always current.
    pub fn command_context(&self) -> CommandContext {
        match &self.screen {
            Screen::Catalog(state) => {
                let port = Rc::new(ChannelCatalogPort::new(self.actions_tx.clone()));
                CommandContext::Catalog(CatalogCommands::new(port, state.layout))
            }
            Screen::Board(state) => {
                let port = Rc::new(ChannelBoardPort::new(self.actions_tx.clone()));
                let project = self.project(&state.project_id).cloned();
                CommandContext::Board(BoardCommands::new(port, project, state.view))
            }
            Screen::About => CommandContext::None,
        }
    }

    /// Execute the panel's selected command and settle its side effects
    pub fn execute_selected_command(&mut self) {
        let context = self.command_context();
        let commands = self.panel.visible_commands(&context);
        let Some(command) = commands.get(self.panel.selected) else {
            return;
        };

        info!(command = %command.id, "executing palette command");
        match self.panel.execute(command) {
            Notification::Success { command } => info!(%command, "command succeeded"),
            Notification::Failure { command, reason } => {
                tracing::warn!(%command, %reason, "command failed");
            }
        }
        self.drain_actions();
    }

    /// Apply every action queued by command execution, in send order
    pub fn drain_actions(&mut self) {
        while let Ok(action) = self.actions_rx.try_recv() {
            self.apply_action(action);
        }
    }

    pub fn apply_action(&mut self, action: HostAction) {
        match action {
            HostAction::Catalog(action) => {
                if let Screen::Catalog(state) = &mut self.screen {
                    Self::apply_catalog_action(state, action);
                }
            }
            HostAction::Board(action) => {
                if let Screen::Board(state) = &mut self.screen {
                    Self::apply_board_action(state, action);
                }
            }
            HostAction::FocusSearch => {
                if let Screen::Catalog(state) = &mut self.screen {
                    state.search_focused = true;
                }
            }
        }
    }

    fn apply_catalog_action(state: &mut CatalogState, action: CatalogAction) {
        match action {
            CatalogAction::SetModalOpen(open) => {
                state.new_project_modal = open;
                if !open {
                    state.new_project_name.clear();
                }
            }
            CatalogAction::SetLayout(layout) => state.layout = layout,
            CatalogAction::SetSearchTerm(term) => state.search_term = term,
            CatalogAction::SetStatusFilter(filter) => state.status_filter = filter,
            CatalogAction::SetSortOption(sort) => state.sort = sort,
        }
    }

    fn apply_board_action(state: &mut BoardState, action: BoardAction) {
        match action {
            BoardAction::OpenModal(modal) => state.modal = Some(modal),
            BoardAction::SetView(view) => state.view = view,
            BoardAction::SetDraft(draft) => state.draft = Some(draft),
            BoardAction::SetEditing(editing) => state.editing = editing,
        }
    }

    /// Projects visible on the catalog after filter, search and sort
    pub fn visible_projects(&self) -> Vec<&Project> {
        let Screen::Catalog(state) = &self.screen else {
            return Vec::new();
        };

        let term = state.search_term.to_lowercase();
        let mut projects: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| state.status_filter.matches(p.status))
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .collect();

        match state.sort {
            SortOption::DateAsc => projects.sort_by_key(|p| p.created_at),
            SortOption::DateDesc => projects.sort_by_key(|p| std::cmp::Reverse(p.created_at)),
            SortOption::NameAsc => {
                projects.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
        }
        projects
    }

    /// Create a project from the new-project modal and close it
    pub fn create_project(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let project = Project {
            id: ProjectId::from_name(name),
            name: name.to_string(),
            description: String::new(),
            color: None,
            tech_stack: None,
            status: ProjectStatus::Planning,
            created_at: now_secs(),
        };
        info!(project = %project.id, "created project");
        self.projects.push(project);

        if let Screen::Catalog(state) = &mut self.screen {
            state.new_project_modal = false;
            state.new_project_name.clear();
        }
    }

    pub fn open_board(&mut self, id: ProjectId) {
        if self.project(&id).is_some() {
            info!(project = %id, "opening board");
            self.screen = Screen::Board(BoardState::new(id));
        }
    }

    pub fn back_to_catalog(&mut self) {
        self.screen = Screen::Catalog(CatalogState::new(self.default_layout, self.default_sort));
    }
}

fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
