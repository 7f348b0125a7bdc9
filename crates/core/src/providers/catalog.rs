use std::rc::Rc;

use super::CommandProvider;
use crate::command::Command;
use crate::domain::{CatalogLayout, ProjectStatus, SortOption, StatusFilter};
use crate::ports::{CatalogAction, CatalogPort};

/// Commands available on the project catalog screen.
///
/// Holds nothing but the port handle and a snapshot of the current layout,
/// taken at construction. The host rebuilds the provider whenever the
/// catalog's state changes, so the snapshot is always current when the
/// command list is materialized.
pub struct CatalogCommands {
    port: Rc<dyn CatalogPort>,
    layout: CatalogLayout,
}

impl CatalogCommands {
    pub fn new(port: Rc<dyn CatalogPort>, layout: CatalogLayout) -> Self {
        Self { port, layout }
    }

    fn create_project(&self) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(
            "create-project",
            "Create New Project",
            "Open the new project dialog",
            "+",
            move || {
                port.dispatch(CatalogAction::SetModalOpen(true));
                Ok(())
            },
        )
        .with_shortcut("Ctrl+N")
    }

    fn toggle_layout(&self) -> Command {
        let port = Rc::clone(&self.port);
        // Snapshot taken at construction, so repeated open/toggle cycles
        // genuinely alternate instead of always landing on one layout.
        let next = self.layout.toggled();
        Command::new(
            "toggle-layout",
            "Toggle Layout",
            "Switch the catalog between grid and list layout",
            "▦",
            move || {
                port.dispatch(CatalogAction::SetLayout(next));
                Ok(())
            },
        )
    }

    fn clear_filters(&self) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(
            "clear-filters",
            "Clear All Filters",
            "Reset search, status filter and sort order",
            "⌫",
            move || {
                // All three resets, in this order; consumers apply the whole
                // batch before observing a consistent state.
                port.dispatch(CatalogAction::SetSearchTerm(String::new()));
                port.dispatch(CatalogAction::SetStatusFilter(StatusFilter::All));
                port.dispatch(CatalogAction::SetSortOption(SortOption::DateAsc));
                Ok(())
            },
        )
    }

    fn focus_search(&self) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(
            "focus-search",
            "Focus Search",
            "Jump to the project search input",
            "/",
            move || {
                // Best-effort adapter call; a missing input is not an error
                let _ = port.focus_search_input();
                Ok(())
            },
        )
        .with_shortcut("/")
    }

    fn sort_by_name(&self) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(
            "sort-name",
            "Sort by Name",
            "Order projects alphabetically",
            "↓",
            move || {
                port.dispatch(CatalogAction::SetSortOption(SortOption::NameAsc));
                Ok(())
            },
        )
    }

    fn sort_by_date(&self) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(
            "sort-date",
            "Sort by Date",
            "Order projects by creation date",
            "↓",
            move || {
                port.dispatch(CatalogAction::SetSortOption(SortOption::DateAsc));
                Ok(())
            },
        )
    }

    fn filter_by_status(&self, status: ProjectStatus) -> Command {
        let port = Rc::clone(&self.port);
        Command::new(
            format!("filter-{}", status.as_str()),
            format!("Show {} Projects", status.label()),
            format!("Filter the catalog to projects in {}", status.as_str()),
            "◎",
            move || {
                port.dispatch(CatalogAction::SetStatusFilter(StatusFilter::Only(status)));
                Ok(())
            },
        )
    }
}

impl CommandProvider for CatalogCommands {
    fn commands(&self) -> Vec<Command> {
        let mut commands = vec![
            self.create_project(),
            self.toggle_layout(),
            self.clear_filters(),
            self.focus_search(),
            self.sort_by_name(),
            self.sort_by_date(),
        ];
        commands.extend(
            ProjectStatus::ALL
                .iter()
                .map(|status| self.filter_by_status(*status)),
        );
        commands
    }
}
