use std::rc::Rc;

use super::CommandProvider;
use crate::command::{Command, CommandCategory};
use crate::domain::{BoardView, Project, ProjectDraft};
use crate::ports::{BoardAction, BoardModal, BoardPort};

/// Commands available while one project's board is open.
///
/// Captures a read-only snapshot of the loaded project at construction;
/// commands that need it read the snapshot, not live state. A board opened
/// without a loaded project still gets the full list, with the
/// project-dependent commands degrading to no-ops.
pub struct BoardCommands {
    port: Rc<dyn BoardPort>,
    project: Option<Project>,
    view: BoardView,
}

impl BoardCommands {
    pub fn new(port: Rc<dyn BoardPort>, project: Option<Project>, view: BoardView) -> Self {
        Self {
            port,
            project,
            view,
        }
    }

    /// View snapshot taken at construction, for browser chrome
    pub fn current_view(&self) -> BoardView {
        self.view
    }

    /// Commands carrying the given category tag, in declared order
    pub fn commands_by_category(&self, category: CommandCategory) -> Vec<Command> {
        self.commands()
            .into_iter()
            .filter(|command| command.category == Some(category))
            .collect()
    }

    fn open_modal(
        &self,
        id: &'static str,
        name: &'static str,
        description: &'static str,
        icon: &'static str,
        modal: BoardModal,
        category: CommandCategory,
    ) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(id, name, description, icon, move || {
            port.dispatch(BoardAction::OpenModal(modal));
            Ok(())
        })
        .with_category(category)
    }

    fn switch_view(&self, view: BoardView) -> Command {
        let port = Rc::clone(&self.port);
        let id = match view {
            BoardView::Kanban => "view-kanban",
            BoardView::Pages => "view-pages",
            BoardView::Structure => "view-structure",
            BoardView::Timeline => "view-timeline",
        };
        Command::new(
            id,
            format!("{} View", view.label()),
            format!("Switch the board to the {} view", view.label().to_lowercase()),
            "◫",
            move || {
                port.dispatch(BoardAction::SetView(view));
                Ok(())
            },
        )
        .with_category(CommandCategory::View)
    }

    fn edit_project(&self) -> Command {
        let port = Rc::clone(&self.port);
        let project = self.project.clone();
        Command::new(
            "edit-project",
            "Edit Project",
            "Copy the loaded project into an editable draft",
            "✎",
            move || {
                // No project loaded: nothing to copy, deliberately not an error
                let Some(project) = project.as_ref() else {
                    return Ok(());
                };
                port.dispatch(BoardAction::SetDraft(ProjectDraft::from_project(project)));
                port.dispatch(BoardAction::SetEditing(true));
                Ok(())
            },
        )
        .with_category(CommandCategory::Project)
    }
}

impl CommandProvider for BoardCommands {
    fn commands(&self) -> Vec<Command> {
        vec![
            self.open_modal(
                "create-page",
                "Create New Page",
                "Open the page creation dialog",
                "▤",
                BoardModal::NewPage,
                CommandCategory::Page,
            ),
            self.open_modal(
                "create-story",
                "Create New Story",
                "Open the story creation dialog",
                "☰",
                BoardModal::NewStory,
                CommandCategory::Story,
            ),
            self.open_modal(
                "create-file",
                "Create New File",
                "Open the file creation dialog",
                "▢",
                BoardModal::NewFile,
                CommandCategory::File,
            ),
            self.switch_view(BoardView::Kanban),
            self.switch_view(BoardView::Pages),
            self.switch_view(BoardView::Structure),
            self.switch_view(BoardView::Timeline),
            self.open_modal(
                "ai-generate",
                "AI Generate",
                "Open the AI generation dialog",
                "✦",
                BoardModal::Generate,
                CommandCategory::Ai,
            ),
            self.open_modal(
                "ai-full-generation",
                "AI Full Generation",
                "Open the full project generation dialog",
                "✦",
                BoardModal::FullGeneration,
                CommandCategory::Ai,
            ),
            self.edit_project(),
            self.open_modal(
                "open-auth",
                "Auth Settings",
                "Open the authentication configuration dialog",
                "⚿",
                BoardModal::Auth,
                CommandCategory::Project,
            ),
            self.open_modal(
                "open-colors",
                "Color Settings",
                "Open the color configuration dialog",
                "◍",
                BoardModal::Colors,
                CommandCategory::Project,
            ),
            self.open_modal(
                "open-components",
                "Component Settings",
                "Open the component configuration dialog",
                "◧",
                BoardModal::Components,
                CommandCategory::Project,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectId, ProjectStatus};
    use crate::providers::ensure_unique_ids;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPort {
        actions: RefCell<Vec<BoardAction>>,
    }

    impl BoardPort for RecordingPort {
        fn dispatch(&self, action: BoardAction) {
            self.actions.borrow_mut().push(action);
        }
    }

    fn sample_project() -> Project {
        Project {
            id: ProjectId::from_name("Billing Engine"),
            name: "Billing Engine".to_string(),
            description: "Usage metering and invoicing".to_string(),
            color: None,
            tech_stack: None,
            status: ProjectStatus::Development,
            created_at: 1_700_000_000,
        }
    }

    fn provider_with_port(project: Option<Project>) -> (BoardCommands, Rc<RecordingPort>) {
        let port = Rc::new(RecordingPort::default());
        let provider = BoardCommands::new(
            Rc::clone(&port) as Rc<dyn BoardPort>,
            project,
            BoardView::Kanban,
        );
        (provider, port)
    }

    fn run_command(provider: &BoardCommands, id: &str) {
        let commands = provider.commands();
        let command = commands
            .iter()
            .find(|c| c.id == id)
            .unwrap_or_else(|| panic!("missing command {id}"));
        command.run().unwrap();
    }

    #[test]
    fn test_thirteen_commands_in_declared_order_with_unique_ids() {
        let (provider, _port) = provider_with_port(Some(sample_project()));
        let commands = provider.commands();

        let ids: Vec<&str> = commands.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "create-page",
                "create-story",
                "create-file",
                "view-kanban",
                "view-pages",
                "view-structure",
                "view-timeline",
                "ai-generate",
                "ai-full-generation",
                "edit-project",
                "open-auth",
                "open-colors",
                "open-components",
            ]
        );
        ensure_unique_ids(&commands).unwrap();
    }

    #[test]
    fn test_view_category_is_exactly_the_four_view_switches() {
        let (provider, _port) = provider_with_port(Some(sample_project()));
        let ids: Vec<String> = provider
            .commands_by_category(CommandCategory::View)
            .iter()
            .map(|c| c.id.clone())
            .collect();

        assert_eq!(
            ids,
            vec!["view-kanban", "view-pages", "view-structure", "view-timeline"]
        );
    }

    #[test]
    fn test_view_switch_dispatches_target_view() {
        let (provider, port) = provider_with_port(Some(sample_project()));
        run_command(&provider, "view-timeline");

        assert_eq!(
            *port.actions.borrow(),
            vec![BoardAction::SetView(BoardView::Timeline)]
        );
    }

    #[test]
    fn test_creation_commands_open_their_modals() {
        let (provider, port) = provider_with_port(Some(sample_project()));
        run_command(&provider, "create-story");
        run_command(&provider, "open-colors");

        assert_eq!(
            *port.actions.borrow(),
            vec![
                BoardAction::OpenModal(BoardModal::NewStory),
                BoardAction::OpenModal(BoardModal::Colors),
            ]
        );
    }

    #[test]
    fn test_edit_project_copies_snapshot_with_defaults() {
        let mut project = sample_project();
        project.tech_stack = Some(vec!["rust".to_string()]);
        let (provider, port) = provider_with_port(Some(project));
        run_command(&provider, "edit-project");

        let actions = port.actions.borrow();
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            BoardAction::SetDraft(draft) => {
                assert_eq!(draft.name, "Billing Engine");
                assert_eq!(draft.color, "");
                assert_eq!(draft.tech_stack, vec!["rust"]);
            }
            other => panic!("expected SetDraft, got {other:?}"),
        }
        assert_eq!(actions[1], BoardAction::SetEditing(true));
    }

    #[test]
    fn test_edit_project_without_project_is_a_no_op() {
        let (provider, port) = provider_with_port(None);
        run_command(&provider, "edit-project");

        assert!(port.actions.borrow().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (provider, _port) = provider_with_port(Some(sample_project()));

        let upper: Vec<String> = provider.search("PAGE").iter().map(|c| c.id.clone()).collect();
        let lower: Vec<String> = provider.search("page").iter().map(|c| c.id.clone()).collect();

        assert_eq!(upper, lower);
        assert!(upper.contains(&"create-page".to_string()));
    }

    #[test]
    fn test_current_view_reports_construction_snapshot() {
        let (provider, _port) = provider_with_port(None);
        assert_eq!(provider.current_view(), BoardView::Kanban);
    }
}
